use super::*;

// Far above any id a test host hands out.
const UNKNOWN_ID: u32 = 3_999_999_999;

#[test]
fn root_resolves_by_uid_and_name() {
    let by_uid = user_by_uid(0).expect("getpwuid_r").expect("root entry");
    assert_eq!(by_uid.pw_name, "root");
    assert_eq!(by_uid.pw_uid, 0);

    let by_name = user_by_name("root").expect("getpwnam_r").expect("root entry");
    assert_eq!(by_name, by_uid);
}

#[test]
fn unknown_ids_fall_back_to_decimal() {
    assert_eq!(owner_name(UNKNOWN_ID), "3999999999");
    assert_eq!(group_name(UNKNOWN_ID), "3999999999");
}

#[test]
fn unknown_lookups_are_none_not_errors() {
    assert!(user_by_uid(UNKNOWN_ID).expect("lookup").is_none());
    assert!(user_by_name("no-such-user-statprobe").expect("lookup").is_none());
    assert!(user_by_name("bad\0name").expect("lookup").is_none());
    assert!(group_by_gid(UNKNOWN_ID).expect("lookup").is_none());
}

#[test]
fn current_owner_has_a_name() {
    let uid = unsafe { libc::geteuid() };
    let name = owner_name(uid);
    assert!(!name.is_empty());

    let gid = unsafe { libc::getegid() };
    assert!(!group_name(gid).is_empty());
}

#[test]
fn all_users_contains_root_once_per_call() {
    let first = all_users();
    let second = all_users();

    assert!(first.iter().any(|u| u.pw_uid == 0 && u.pw_name == "root"));
    assert_eq!(first.len(), second.len());
}
