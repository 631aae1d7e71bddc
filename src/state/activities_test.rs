use super::*;

fn board(entries: &[(&str, u32, &[&str])]) -> ActivityBoard {
    entries
        .iter()
        .map(|(name, max, participants)| {
            (
                (*name).to_owned(),
                Activity {
                    description: format!("{name} description"),
                    schedule: "Mondays, 3:30 PM".to_owned(),
                    max_participants: *max,
                    participants: participants.iter().map(|p| (*p).to_owned()).collect(),
                },
            )
        })
        .collect()
}

#[test]
fn default_state_is_loading_with_no_options() {
    let state = ActivitiesState::default();
    assert_eq!(state.status, LoadStatus::Loading);
    assert!(state.options.is_empty());
    assert!(state.cards().is_empty());
}

#[test]
fn apply_renders_one_card_and_one_option_per_activity() {
    let mut state = ActivitiesState::default();
    state.apply(Ok(board(&[
        ("Chess Club", 12, &["michael@mergington.edu"]),
        ("Programming Class", 20, &[]),
        ("Gym Class", 30, &["john@mergington.edu", "olivia@mergington.edu"]),
    ])));
    assert_eq!(state.cards().len(), 3);
    assert_eq!(state.options, vec!["Chess Club", "Programming Class", "Gym Class"]);
}

#[test]
fn spots_left_matches_capacity_minus_participants() {
    let mut state = ActivitiesState::default();
    state.apply(Ok(board(&[
        ("Open", 5, &["a@x.edu"]),
        ("Full", 1, &["a@x.edu"]),
        ("Over", 1, &["a@x.edu", "b@x.edu"]),
    ])));
    let spots: Vec<i64> = state.cards().iter().map(|c| c.spots_left).collect();
    assert_eq!(spots, vec![4, 0, -1]);
    assert_eq!(state.cards()[2].availability_text(), "-1 spots left");
}

#[test]
fn participant_rows_carry_activity_and_email() {
    let mut state = ActivitiesState::default();
    state.apply(Ok(board(&[("Drama", 10, &["a@x.edu", "b@x.edu"])])));
    let rows = &state.cards()[0].participants;
    assert_eq!(
        rows,
        &vec![
            ParticipantRow { activity: "Drama".to_owned(), email: "a@x.edu".to_owned() },
            ParticipantRow { activity: "Drama".to_owned(), email: "b@x.edu".to_owned() },
        ]
    );
}

#[test]
fn reapplying_the_same_board_is_idempotent() {
    let snapshot = board(&[("Chess", 2, &["a@x.edu"]), ("Art", 3, &[])]);
    let mut once = ActivitiesState::default();
    once.apply(Ok(snapshot.clone()));
    let mut twice = once.clone();
    twice.apply(Ok(snapshot));
    assert_eq!(once, twice);
}

#[test]
fn new_snapshot_replaces_previous_cards_and_options() {
    let mut state = ActivitiesState::default();
    state.apply(Ok(board(&[("Chess", 2, &[]), ("Art", 3, &[])])));
    state.apply(Ok(board(&[("Robotics", 8, &[])])));
    assert_eq!(state.cards().len(), 1);
    assert_eq!(state.options, vec!["Robotics"]);
}

#[test]
fn duplicate_names_produce_duplicate_options() {
    let mut state = ActivitiesState::default();
    state.apply(Ok(board(&[("Chess", 2, &[]), ("Chess", 4, &[])])));
    assert_eq!(state.options, vec!["Chess", "Chess"]);
    assert_eq!(state.cards().len(), 2);
}

#[test]
fn failure_shows_notice_but_keeps_previous_options() {
    let mut state = ActivitiesState::default();
    state.apply(Ok(board(&[("Chess", 2, &[])])));
    state.apply(Err(ApiError::Network("offline".to_owned())));
    assert!(state.status.is_failed());
    assert!(state.cards().is_empty());
    assert_eq!(state.options, vec!["Chess"]);
}

#[test]
fn failure_before_any_success_leaves_options_empty() {
    let mut state = ActivitiesState::default();
    state.apply(Err(ApiError::Decode("not json".to_owned())));
    assert!(state.status.is_failed());
    assert!(state.options.is_empty());
}
