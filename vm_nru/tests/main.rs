use aok::{OK, Void};
use log::info;
use proptest::prelude::*;
use vm_nru::{Class, Policy, Resident, nru};

#[static_init::constructor(0)]
extern "C" fn _log_init() {
  log_init::init();
}

fn res(page: u32, referenced: bool, modified: bool) -> Resident {
  Resident {
    page,
    referenced,
    modified,
  }
}

#[test]
fn test_class_of() -> Void {
  assert_eq!(Class::of(false, false), Class::Idle);
  assert_eq!(Class::of(false, true), Class::IdleDirty);
  assert_eq!(Class::of(true, false), Class::Recent);
  assert_eq!(Class::of(true, true), Class::RecentDirty);
  assert!(Class::Idle < Class::IdleDirty);
  assert!(Class::IdleDirty < Class::Recent);
  assert!(Class::Recent < Class::RecentDirty);
  assert_eq!(Class::RecentDirty.num(), 3);
  OK
}

#[test]
fn test_empty_has_no_victim() -> Void {
  let empty: Vec<Resident> = Vec::new();
  assert_eq!(nru::victim(empty.clone()), None);
  assert_eq!(Policy::Nru.victim(empty), None);
  OK
}

#[test]
fn test_lowest_class_wins() -> Void {
  // 类别 0 优先于 1、2、3
  let set = [
    res(1, true, true),
    res(2, true, false),
    res(3, false, true),
    res(4, false, false),
  ];
  assert_eq!(nru::victim(set), Some(4));

  // 无类别 0 时取类别 1
  assert_eq!(nru::victim(set[..3].iter().copied()), Some(3));

  // 无类别 0、1 时取类别 2
  assert_eq!(nru::victim(set[..2].iter().copied()), Some(2));

  assert_eq!(nru::victim([res(1, true, true)]), Some(1));
  OK
}

#[test]
fn test_tie_break_smallest_page() -> Void {
  let set = [res(9, true, false), res(0, true, false), res(5, true, false)];
  assert_eq!(Policy::Nru.victim(set), Some(0));

  // 顺序不影响结果
  let set = [res(5, false, true), res(9, true, false), res(3, false, true)];
  assert_eq!(Policy::Nru.victim(set), Some(3));
  info!("policy {}", Policy::default().name());
  OK
}

fn resident_strategy() -> impl Strategy<Value = Vec<Resident>> {
  prop::collection::btree_map(0u32..1000, (any::<bool>(), any::<bool>()), 1..64).prop_map(|m| {
    m.into_iter()
      .map(|(page, (referenced, modified))| res(page, referenced, modified))
      .collect()
  })
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(100))]

  /// Victim is the smallest page of the lowest non-empty class
  /// 淘汰页为最低非空类别中页号最小者
  #[test]
  fn prop_victim_matches_class_scan(set in resident_strategy()) {
    let expected = (0u8..4).find_map(|c| {
      set
        .iter()
        .filter(|r| r.class().num() == c)
        .map(|r| r.page)
        .min()
    });
    prop_assert_eq!(nru::victim(set.iter().copied()), expected);
  }

  /// Same snapshot, same victim, whatever the order
  /// 相同快照，无论顺序，结果相同
  #[test]
  fn prop_victim_deterministic(set in resident_strategy()) {
    let first = Policy::Nru.victim(set.iter().copied());
    let mut rev = set.clone();
    rev.reverse();
    prop_assert_eq!(first, Policy::Nru.victim(set.iter().copied()));
    prop_assert_eq!(first, Policy::Nru.victim(rev));
  }
}
