// SPDX-FileCopyrightText: 2026 Orange Air Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end workflow scenarios against mock calendar and mail adapters.

use chrono::NaiveDate;
use orangeair_core::{
    Brand, EquipmentType, OrangeairError, Parking, PhotoUpload, ReservedSlot, TimeBucket,
    UsageType,
};
use orangeair_test_utils::{CalendarFailure, TestHarness, sample_png};
use orangeair_workflow::{
    Action, BOOKING_RECEIVED, BULK_DISCOUNT_NOTICE, BookingForm, PreferredSlot, SUPPORT_RECEIVED,
    Screen, ServiceChoice, Session, Step, SupportForm,
};

fn june(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
}

fn choose(service: ServiceChoice) -> Action {
    Action::ChooseService { service }
}

fn add(equipment_type: EquipmentType, count: u8, photos: Vec<PhotoUpload>) -> Action {
    Action::AddUnit {
        brand: Brand::Samsung,
        equipment_type,
        count,
        photos,
    }
}

fn photo(name: &str) -> PhotoUpload {
    PhotoUpload {
        filename: name.to_string(),
        data: sample_png(64, 48),
    }
}

fn booking_form() -> BookingForm {
    BookingForm {
        preferences: vec![
            PreferredSlot {
                date: june(2),
                bucket: TimeBucket::Morning,
            },
            PreferredSlot {
                date: june(3),
                bucket: TimeBucket::LateAfternoon,
            },
            PreferredSlot {
                date: june(4),
                bucket: TimeBucket::AnyTime,
            },
        ],
        address: "123 Teheran-ro, Gangnam-gu, Seoul".to_string(),
        parking: Parking::Available,
        notes: "Please call before arriving".to_string(),
        name: "Kim Minji".to_string(),
        phone: "010-1234-5678".to_string(),
    }
}

async fn residential_session(harness: &TestHarness, referral: Option<&str>) -> Session {
    let workflow = &harness.workflow;
    let mut session = harness.start(referral);
    workflow
        .apply(&mut session, choose(ServiceChoice::Residential))
        .await
        .unwrap();
    session
}

#[tokio::test]
async fn running_total_follows_added_units_and_reset() {
    let harness = TestHarness::builder().build().unwrap();
    let mut session = residential_session(&harness, None).await;
    let workflow = &harness.workflow;

    workflow
        .apply(&mut session, add(EquipmentType::WallMounted, 2, Vec::new()))
        .await
        .unwrap();
    assert_eq!(session.total(), 140_000);

    let view = workflow
        .apply(&mut session, add(EquipmentType::FloorStanding, 1, Vec::new()))
        .await
        .unwrap();
    assert_eq!(session.total(), 260_000);
    match view.screen {
        Screen::EquipmentEntry { units, total, .. } => {
            assert_eq!(units.len(), 2);
            assert_eq!(total, 260_000);
        }
        other => panic!("expected equipment entry screen, got {other:?}"),
    }

    workflow
        .apply(&mut session, Action::ResetUnits)
        .await
        .unwrap();
    assert_eq!(session.total(), 0);
    assert!(session.units().is_empty());
    assert_eq!(session.step(), Step::EquipmentEntry(UsageType::Residential));
}

#[tokio::test]
async fn count_out_of_range_is_rejected_without_changes() {
    let harness = TestHarness::builder().build().unwrap();
    let mut session = residential_session(&harness, None).await;

    for count in [0, 11] {
        let err = harness
            .workflow
            .apply(&mut session, add(EquipmentType::WallMounted, count, Vec::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, OrangeairError::Validation(_)));
    }
    assert!(session.units().is_empty());
    assert_eq!(session.total(), 0);
}

#[tokio::test]
async fn unsupported_photo_extension_is_rejected() {
    let harness = TestHarness::builder().build().unwrap();
    let mut session = residential_session(&harness, None).await;

    let err = harness
        .workflow
        .apply(
            &mut session,
            add(
                EquipmentType::WallMounted,
                1,
                vec![photo("front.png"), photo("clip.gif")],
            ),
        )
        .await
        .unwrap_err();
    assert!(err.to_string().contains("clip.gif"));
    assert!(session.units().is_empty());
    assert!(session.photos().is_empty());
}

#[tokio::test]
async fn commercial_screen_shows_bulk_discount_once_units_exist() {
    let harness = TestHarness::builder().build().unwrap();
    let workflow = &harness.workflow;
    let mut session = harness.start(None);

    let view = workflow
        .apply(&mut session, choose(ServiceChoice::Commercial))
        .await
        .unwrap();
    match view.screen {
        Screen::EquipmentEntry {
            bulk_discount_notice,
            ..
        } => assert_eq!(bulk_discount_notice, None),
        other => panic!("unexpected {other:?}"),
    }

    let view = workflow
        .apply(&mut session, add(EquipmentType::FourWay, 4, Vec::new()))
        .await
        .unwrap();
    match view.screen {
        Screen::EquipmentEntry {
            bulk_discount_notice,
            ..
        } => assert_eq!(bulk_discount_notice, Some(BULK_DISCOUNT_NOTICE)),
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn reserved_morning_is_not_offered_for_its_date() {
    let harness = TestHarness::builder()
        .with_reserved(vec![ReservedSlot {
            date: june(1),
            bucket: TimeBucket::Morning,
        }])
        .build()
        .unwrap();
    let workflow = &harness.workflow;
    let mut session = residential_session(&harness, None).await;

    let view = workflow.apply(&mut session, Action::Proceed).await.unwrap();
    assert_eq!(view.step, Step::Reservation);
    match view.screen {
        Screen::Reservation { reserved, dates, .. } => {
            assert_eq!(reserved.len(), 1);
            assert_eq!(dates.first, TestHarness::today());
        }
        other => panic!("unexpected {other:?}"),
    }

    let day = workflow.availability(&mut session, june(1)).await.unwrap();
    assert!(!day.offered.contains(&TimeBucket::Morning));
    assert_eq!(
        day.offered,
        vec![
            TimeBucket::EarlyAfternoon,
            TimeBucket::LateAfternoon,
            TimeBucket::Evening,
            TimeBucket::AnyTime,
        ]
    );
    assert_eq!(day.disabled, vec![TimeBucket::Morning]);

    let other_day = workflow.availability(&mut session, june(2)).await.unwrap();
    assert_eq!(other_day.offered, TimeBucket::OPTIONS.to_vec());
    assert_eq!(harness.calendar.call_count(), 3);
}

#[tokio::test]
async fn availability_outside_the_window_is_rejected() {
    let harness = TestHarness::builder().build().unwrap();
    let mut session = harness.start(None);
    let before = NaiveDate::from_ymd_opt(2025, 5, 29).unwrap();
    let err = harness
        .workflow
        .availability(&mut session, before)
        .await
        .unwrap_err();
    assert!(matches!(err, OrangeairError::Validation(_)));
    assert_eq!(harness.calendar.call_count(), 0);
}

#[tokio::test]
async fn session_keeps_only_the_first_five_photos() {
    let harness = TestHarness::builder().build().unwrap();
    let workflow = &harness.workflow;
    let mut session = residential_session(&harness, None).await;

    let mut view = None;
    for batch in 1..=3 {
        let photos = (1..=4)
            .map(|i| photo(&format!("unit{batch}-{i}.png")))
            .collect();
        view = Some(
            workflow
                .apply(&mut session, add(EquipmentType::TwoWay, 1, photos))
                .await
                .unwrap(),
        );
    }

    assert_eq!(session.units().len(), 3);
    assert_eq!(session.photos().len(), 5);
    assert_eq!(session.photos()[4].filename, "unit2-1.png");
    match view.unwrap().screen {
        Screen::EquipmentEntry { photos, max_photos, .. } => {
            assert_eq!(photos, 5);
            assert_eq!(max_photos, 5);
        }
        other => panic!("expected equipment entry, got {other:?}"),
    }
}

#[tokio::test]
async fn booking_emails_itemized_summary_with_five_photos() {
    let harness = TestHarness::builder().build().unwrap();
    let workflow = &harness.workflow;
    let mut session = residential_session(&harness, Some("010-9999-0000")).await;

    let first: Vec<PhotoUpload> = (1..=4).map(|i| photo(&format!("wall{i}.png"))).collect();
    let second: Vec<PhotoUpload> = (1..=2).map(|i| photo(&format!("floor{i}.PNG"))).collect();
    workflow
        .apply(&mut session, add(EquipmentType::WallMounted, 2, first))
        .await
        .unwrap();
    workflow
        .apply(&mut session, add(EquipmentType::FloorStanding, 1, second))
        .await
        .unwrap();
    assert_eq!(session.photos().len(), 5);

    workflow.apply(&mut session, Action::Proceed).await.unwrap();
    let view = workflow
        .apply(&mut session, Action::SubmitBooking(booking_form()))
        .await
        .unwrap();
    assert_eq!(view.step, Step::Reservation);
    assert_eq!(view.notice.as_deref(), Some(BOOKING_RECEIVED));
    assert!(session.referral_prompt());

    let sent = harness.mailer.sent_emails().await;
    assert_eq!(sent.len(), 1);
    let email = &sent[0];
    assert_eq!(email.subject, "[Air conditioner booking request]");
    assert_eq!(email.recipient, "orangeair2025@gmail.com");
    assert_eq!(email.attachments.len(), 5);
    assert!(email.attachments.iter().all(|a| a.filename.ends_with(".jpg")));

    let body = &email.html_body;
    assert_eq!(body.matches("&times;").count(), 2);
    assert!(body.contains("Samsung wall-mounted &times; 2 &rarr; 140,000 won"));
    assert!(body.contains("Samsung floor-standing &times; 1 &rarr; 120,000 won"));
    assert!(body.contains("Total: 260,000 won"));
    assert!(body.contains("2025/06/02 (Monday) morning"));
    assert!(body.contains("010-9999-0000"));
}

#[tokio::test]
async fn accepting_the_referral_prompt_opens_recommend() {
    let harness = TestHarness::builder().build().unwrap();
    let workflow = &harness.workflow;
    let mut session = residential_session(&harness, None).await;
    workflow
        .apply(&mut session, add(EquipmentType::WallMounted, 1, Vec::new()))
        .await
        .unwrap();
    workflow.apply(&mut session, Action::Proceed).await.unwrap();

    let err = workflow
        .apply(&mut session, Action::AcceptReferral)
        .await
        .unwrap_err();
    assert!(matches!(err, OrangeairError::InvalidTransition { .. }));

    workflow
        .apply(&mut session, Action::SubmitBooking(booking_form()))
        .await
        .unwrap();
    let view = workflow
        .apply(&mut session, Action::AcceptReferral)
        .await
        .unwrap();
    assert_eq!(view.step, Step::Recommend);
    assert!(view.notice.is_none());
    assert!(!session.referral_prompt());

    let view = workflow
        .apply(
            &mut session,
            Action::GenerateReferral {
                phone: "010-1234-5678".to_string(),
            },
        )
        .await
        .unwrap();
    match view.screen {
        Screen::Recommend {
            referral_link,
            instructions,
        } => {
            assert_eq!(
                referral_link.as_deref(),
                Some("https://airconbot.com/?ref=010-1234-5678")
            );
            assert_eq!(instructions.len(), 2);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[tokio::test]
async fn booking_on_a_reserved_slot_sends_nothing() {
    let harness = TestHarness::builder()
        .with_reserved(vec![ReservedSlot {
            date: june(2),
            bucket: TimeBucket::Morning,
        }])
        .build()
        .unwrap();
    let workflow = &harness.workflow;
    let mut session = residential_session(&harness, None).await;
    workflow.apply(&mut session, Action::Proceed).await.unwrap();

    let err = workflow
        .apply(&mut session, Action::SubmitBooking(booking_form()))
        .await
        .unwrap_err();
    assert!(matches!(err, OrangeairError::Validation(_)));
    assert_eq!(harness.mailer.sent_count().await, 0);
    assert!(!session.referral_prompt());
}

#[tokio::test]
async fn calendar_auth_failure_keeps_the_session_in_place() {
    let harness = TestHarness::builder()
        .with_calendar_failure(CalendarFailure::Auth("invalid_grant".to_string()))
        .build()
        .unwrap();
    let workflow = &harness.workflow;
    let mut session = residential_session(&harness, None).await;
    workflow
        .apply(&mut session, add(EquipmentType::WallMounted, 1, Vec::new()))
        .await
        .unwrap();

    let err = workflow
        .apply(&mut session, Action::Proceed)
        .await
        .unwrap_err();
    assert!(matches!(err, OrangeairError::CalendarAuth { .. }));
    assert_eq!(session.step(), Step::EquipmentEntry(UsageType::Residential));
    assert!(session.reserved().is_empty());
    assert_eq!(session.total(), 70_000);
    assert_eq!(harness.calendar.call_count(), 1);
}

#[tokio::test]
async fn mail_failure_does_not_raise_the_referral_prompt() {
    let harness = TestHarness::builder()
        .with_mail_rejection("535 authentication failed")
        .build()
        .unwrap();
    let workflow = &harness.workflow;
    let mut session = residential_session(&harness, None).await;
    workflow.apply(&mut session, Action::Proceed).await.unwrap();

    let err = workflow
        .apply(&mut session, Action::SubmitBooking(booking_form()))
        .await
        .unwrap_err();
    assert!(err.is_external());
    assert!(!session.referral_prompt());
    assert!(session.notice().is_none());
}

#[tokio::test]
async fn support_request_is_mailed_and_returns_to_main() {
    let harness = TestHarness::builder().build().unwrap();
    let workflow = &harness.workflow;
    let mut session = harness.start(None);
    workflow
        .apply(&mut session, choose(ServiceChoice::Support))
        .await
        .unwrap();

    let form = SupportForm {
        region: "Bundang".to_string(),
        phone: "010-2222-3333".to_string(),
        visit_date: "2024-05-01".to_string(),
        symptoms: "Water dripping <after> cleaning".to_string(),
        photos: vec![photo("leak.jpeg.png")],
    };
    let view = workflow
        .apply(&mut session, Action::SubmitSupport(form))
        .await
        .unwrap();
    assert_eq!(view.step, Step::Main);
    assert_eq!(view.notice.as_deref(), Some(SUPPORT_RECEIVED));

    let sent = harness.mailer.sent_emails().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "[Air conditioner AS request]");
    assert_eq!(sent[0].attachments.len(), 1);
    assert!(sent[0].html_body.contains("&lt;after&gt;"));

    // The notice is shown once.
    let view = workflow.apply(&mut session, choose(ServiceChoice::Referral)).await.unwrap();
    assert!(view.notice.is_none());
}

#[tokio::test]
async fn main_screen_refreshes_the_recommender_code() {
    let harness = TestHarness::builder().build().unwrap();
    let workflow = &harness.workflow;
    let (mut session, view) = workflow.start(Some("010-1111-2222"));
    match view.screen {
        Screen::Main { recommender, .. } => assert_eq!(recommender, "010-1111-2222"),
        other => panic!("unexpected {other:?}"),
    }

    workflow.show(&mut session, Some("010-3333-4444"));
    assert_eq!(session.recommender(), "010-3333-4444");
    workflow.show(&mut session, None);
    assert_eq!(session.recommender(), "");

    workflow.show(&mut session, Some("010-5555-6666"));
    workflow
        .apply(&mut session, choose(ServiceChoice::Residential))
        .await
        .unwrap();
    // Only the main screen stores the code.
    workflow.show(&mut session, Some("ignored"));
    assert_eq!(session.recommender(), "010-5555-6666");
}

#[tokio::test]
async fn going_back_keeps_units() {
    let harness = TestHarness::builder().build().unwrap();
    let workflow = &harness.workflow;
    let mut session = harness.start(None);
    workflow
        .apply(&mut session, choose(ServiceChoice::Commercial))
        .await
        .unwrap();
    workflow
        .apply(&mut session, add(EquipmentType::TwoWay, 3, Vec::new()))
        .await
        .unwrap();
    workflow.apply(&mut session, Action::Proceed).await.unwrap();

    let view = workflow.apply(&mut session, Action::Back).await.unwrap();
    assert_eq!(view.step, Step::EquipmentEntry(UsageType::Commercial));
    assert_eq!(session.total(), 270_000);
    workflow.apply(&mut session, Action::Back).await.unwrap();
    assert_eq!(session.step(), Step::Main);
    assert_eq!(session.units().len(), 1);
}
