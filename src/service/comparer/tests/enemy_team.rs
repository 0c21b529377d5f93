use super::fixtures;
use crate::service::comparer::MatchComparer;

/// Enemy unknown on both sides never fires
#[test]
fn not_set() {
    let (old, new) = fixtures();

    let cp = MatchComparer::new(&old, &new);
    assert_eq!(cp.compare_new_enemy_team().unwrap(), None);
}

/// An unchanged known enemy does not fire
#[test]
fn not_changed() {
    let (mut old, mut new) = fixtures();
    old.enemy_team_external_id = Some(2);
    new.enemy_team_id = Some(2);

    let cp = MatchComparer::new(&old, &new);
    assert_eq!(cp.compare_new_enemy_team().unwrap(), None);
}

/// First discovery fires with the discovered id
#[test]
fn new_set() {
    let (old, mut new) = fixtures();
    new.enemy_team_id = Some(7);

    let cp = MatchComparer::new(&old, &new);
    assert_eq!(cp.compare_new_enemy_team().unwrap(), Some(7));
}

/// A different non-null id fires with the new id
#[test]
fn changed() {
    let (mut old, mut new) = fixtures();
    old.enemy_team_external_id = Some(2);
    new.enemy_team_id = Some(3);

    let cp = MatchComparer::new(&old, &new);
    assert_eq!(cp.compare_new_enemy_team().unwrap(), Some(3));
}

/// Losing a known enemy (bracket reshuffle) is not a discovery
#[test]
fn unset_does_not_fire() {
    let (mut old, new) = fixtures();
    old.enemy_team_external_id = Some(2);

    let cp = MatchComparer::new(&old, &new);
    assert_eq!(cp.compare_new_enemy_team().unwrap(), None);
}
