mod helpers;

use chalet_reservations_domain::{ReservationEntry, SortDirection, ID};
use helpers::setup::spawn_service;
use helpers::utils::{date, entry, save};
use serial_test::serial;

#[tokio::test]
#[serial]
async fn test_save_find_and_delete() {
    let service = spawn_service().await;

    let reservation = save(&service, entry()).await;
    assert_eq!(reservation.damages, None);
    assert_eq!(
        service.find(&reservation.id).await.unwrap(),
        Some(reservation.clone())
    );
    assert_eq!(service.find_all().await.unwrap(), vec![reservation.clone()]);

    assert!(service.delete(&reservation.id).await.is_ok());
    assert!(service.find(&reservation.id).await.unwrap().is_none());
    // Deleting twice is fine
    assert!(service.delete(&reservation.id).await.is_ok());
    assert!(service.find(&ID::new()).await.unwrap().is_none());
}

#[tokio::test]
#[serial]
async fn test_most_expensive() {
    let service = spawn_service().await;

    let mut top_ten = Vec::new();
    for price in 10..20 {
        top_ten.push(save(&service, ReservationEntry { price, ..entry() }).await);
    }
    for price in 1..10 {
        save(&service, ReservationEntry { price, ..entry() }).await;
    }
    save(
        &service,
        ReservationEntry {
            price: 500,
            date: date().pred_opt().unwrap(),
            ..entry()
        },
    )
    .await;

    top_ten.reverse();
    assert_eq!(service.most_expensive(date()).await.unwrap(), top_ten);
}

#[tokio::test]
#[serial]
async fn test_damage_claims() {
    let service = spawn_service().await;

    let chalet = |chalet: &str, has_insurance: bool| ReservationEntry {
        price: 20,
        chalet: chalet.into(),
        booker: "alex".into(),
        has_insurance,
        ..entry()
    };
    let with_damages_and_insurance = save(&service, chalet("120A", true)).await;
    let with_damages_without_insurance = save(&service, chalet("120A", false)).await;
    save(&service, chalet("120A", false)).await;
    save(&service, chalet("120A", true)).await;
    let other_chalet = save(&service, chalet("100B", false)).await;

    for (reservation, damage) in [
        (&with_damages_and_insurance, "broken window"),
        (&with_damages_without_insurance, "broken table"),
        (&other_chalet, "broken sink"),
    ] {
        service.file_damage(&reservation.id, damage).await.unwrap();
    }

    let claims = service.damage_claims("120A").await.unwrap();
    assert_eq!(claims.len(), 1);
    assert_eq!(claims[0].id, with_damages_without_insurance.id);
    assert_eq!(claims[0].damages, Some(vec!["broken table".to_string()]));
}

#[tokio::test]
#[serial]
async fn test_page_and_sort() {
    let service = spawn_service().await;

    let booker = |booker: &str, yesterday: bool| ReservationEntry {
        booker: booker.into(),
        date: if yesterday {
            date().pred_opt().unwrap()
        } else {
            date()
        },
        ..entry()
    };
    let thomas = save(&service, booker("thomas", false)).await;
    let anouk = save(&service, booker("anouk", false)).await;
    save(&service, booker("will", false)).await;
    save(&service, booker("rebecca", true)).await;
    let john = save(&service, booker("john", true)).await;

    let page = |size, page, direction| service.page_and_sort(size, page, direction, "o");

    assert_eq!(
        page(2, 0, SortDirection::Ascending).await.unwrap(),
        vec![john.clone(), thomas.clone()]
    );
    assert_eq!(
        page(2, 1, SortDirection::Ascending).await.unwrap(),
        vec![anouk.clone()]
    );
    assert_eq!(
        page(2, 0, SortDirection::Descending).await.unwrap(),
        vec![thomas.clone(), anouk.clone()]
    );
    assert_eq!(
        page(2, 1, SortDirection::Descending).await.unwrap(),
        vec![john.clone()]
    );
    assert!(page(2, 2, SortDirection::Descending)
        .await
        .unwrap()
        .is_empty());

    // Matching ignores case
    let res = service
        .page_and_sort(10, 0, SortDirection::Ascending, "THOM")
        .await
        .unwrap();
    assert_eq!(res, vec![thomas]);

    let res = page(0, 0, SortDirection::Ascending).await;
    assert!(res.unwrap_err().is_bad_client_data());
}

#[tokio::test]
#[serial]
async fn test_booker_correction() {
    let service = spawn_service().await;
    let stored = save(&service, entry()).await;

    service.correct_booker(&stored.id, "jan").await.unwrap();
    let updated = service.find(&stored.id).await.unwrap().unwrap();
    assert_eq!(updated.booker, "jan");

    service.correct_booker(&stored.id, "jan").await.unwrap();
    let again = service.find(&stored.id).await.unwrap().unwrap();
    assert_eq!(again, updated);

    // Unknown reservations are left alone
    assert!(service.correct_booker(&ID::new(), "jan").await.is_ok());
    assert_eq!(service.find_all().await.unwrap(), vec![updated]);
}

#[tokio::test]
#[serial]
async fn test_include_new_guests() {
    let service = spawn_service().await;
    let stored = save(
        &service,
        ReservationEntry {
            guests: vec!["jan".into()],
            ..entry()
        },
    )
    .await;

    service.include_new_guest(&stored.id, "aad").await.unwrap();
    let updated = service.find(&stored.id).await.unwrap().unwrap();
    assert_eq!(updated.guests, vec!["jan".to_string(), "aad".to_string()]);
}

#[tokio::test]
#[serial]
async fn test_anniversary_discount() {
    let service = spawn_service().await;

    let birthday = |price, has_paid, has_insurance, yesterday: bool| ReservationEntry {
        price,
        has_paid,
        has_insurance,
        chalet: "120B".into(),
        booker: "alex".into(),
        date: if yesterday {
            date().pred_opt().unwrap()
        } else {
            date()
        },
        ..entry()
    };
    let cases = [
        (birthday(325, false, true, false), 275),
        (birthday(275, false, true, false), 275),
        (birthday(275, false, false, false), 225),
        (birthday(225, false, false, false), 225),
        (birthday(275, true, false, false), 275),
        (birthday(275, false, false, true), 275),
    ];
    let mut expected = Vec::new();
    for (entry, price) in cases {
        expected.push((save(&service, entry).await.id, price));
    }

    let discounted = service.anniversary_discount(date()).await.unwrap();
    assert_eq!(discounted, 2);

    for (id, price) in expected {
        let reservation = service.find(&id).await.unwrap().unwrap();
        assert_eq!(reservation.price, price);
    }
}

#[tokio::test]
#[serial]
async fn test_checkin_list() {
    let service = spawn_service().await;
    for booker in ["thomas", "anouk", "thomas"] {
        save(
            &service,
            ReservationEntry {
                booker: booker.into(),
                ..entry()
            },
        )
        .await;
    }

    let checkin = service.checkin_list(date()).await.unwrap().unwrap();
    assert_eq!(checkin.date, date());
    assert_eq!(
        checkin.bookers.into_iter().collect::<Vec<_>>(),
        vec!["anouk".to_string(), "thomas".to_string()]
    );

    let nobody = service.checkin_list(date().succ_opt().unwrap()).await;
    assert_eq!(nobody.unwrap(), None);
}

#[tokio::test]
#[serial]
async fn test_income_generated() {
    let service = spawn_service().await;
    let thomas = save(
        &service,
        ReservationEntry {
            booker: "thomas".into(),
            ..entry()
        },
    )
    .await;
    let anouk = save(
        &service,
        ReservationEntry {
            booker: "anouk".into(),
            ..entry()
        },
    )
    .await;
    save(
        &service,
        ReservationEntry {
            date: date().pred_opt().unwrap(),
            ..entry()
        },
    )
    .await;

    let summary = service.income_generated(2023, 1).await.unwrap().unwrap();
    assert_eq!(summary.id, "2023-01");
    assert_eq!(summary.income, thomas.price + anouk.price);
    assert_eq!(
        service.income_summary(2023, 1).await.unwrap(),
        Some(summary.clone())
    );

    // Generating again replaces the stored summary
    save(&service, entry()).await;
    let regenerated = service.income_generated(2023, 1).await.unwrap().unwrap();
    assert_eq!(regenerated.income, summary.income + entry().price);
    assert_eq!(service.income_summaries().await.unwrap(), vec![regenerated]);
}

#[tokio::test]
#[serial]
async fn test_income_of_empty_month() {
    let service = spawn_service().await;
    save(&service, entry()).await;

    assert_eq!(service.income_generated(2023, 2).await.unwrap(), None);
    assert_eq!(service.income_summary(2023, 2).await.unwrap(), None);

    let res = service.income_generated(2023, 13).await;
    assert!(res.unwrap_err().is_bad_client_data());
}

#[tokio::test]
#[serial]
async fn test_insurance_claims() {
    let service = spawn_service().await;

    let claims = [
        ("100B", vec!["broken window", "broken sink"]),
        ("110B", vec!["broken lamp"]),
        ("120B", vec!["broken tile"]),
        ("130B", vec!["broken vacuum"]),
    ];
    for (chalet, damages) in claims {
        let reservation = save(
            &service,
            ReservationEntry {
                chalet: chalet.into(),
                guests: vec!["jan".into(), "rebecca".into()],
                has_insurance: true,
                ..entry()
            },
        )
        .await;
        for damage in damages {
            service.file_damage(&reservation.id, damage).await.unwrap();
        }
    }

    let chalets = vec!["100B".to_string(), "110B".to_string()];
    let res = service.insurance_claims(&chalets, date()).await.unwrap();
    let rows = res
        .iter()
        .map(|claim| (claim.chalet.as_str(), claim.damage.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(
        rows,
        vec![
            ("100B", "broken window"),
            ("100B", "broken sink"),
            ("110B", "broken lamp")
        ]
    );
    assert!(res.iter().all(|claim| claim.date == date() && claim.has_insurance));

    // Rows follow the order the chalets are asked for
    let reversed = vec!["110B".to_string(), "100B".to_string()];
    let res = service.insurance_claims(&reversed, date()).await.unwrap();
    assert_eq!(res[0].damage, "broken lamp");
    assert_eq!(res.len(), 3);

    assert!(service.insurance_claims(&[], date()).await.unwrap().is_empty());
}
