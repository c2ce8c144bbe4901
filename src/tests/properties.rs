use proptest::prelude::*;

use super::Counters;
use crate::{LazyConstructable, Nullable};

proptest! {
    #[test]
    fn constructed_value_reads_back(n in any::<i64>(), s in ".{0,16}") {
        let mut slot: Nullable<(i64, String)> = Nullable::new();
        slot.construct((n, s.clone()));
        prop_assert!(slot.has_value());
        prop_assert_eq!(slot.get().unwrap(), &(n, s));
    }

    #[test]
    fn clones_do_not_alias(base in ".{0,16}", suffix in ".{1,8}") {
        let original: Nullable<String> = Nullable::from(base.clone());
        let mut copy = original.clone();
        copy.get_mut().unwrap().push_str(&suffix);

        prop_assert_eq!(original.get().unwrap(), &base);
        prop_assert_eq!(copy.get().unwrap(), &format!("{base}{suffix}"));
    }

    #[test]
    fn every_replaced_value_is_dropped_once(ids in prop::collection::vec(any::<u32>(), 1..32)) {
        let counters = Counters::new();
        let mut slot: Nullable<super::Tracked> = Nullable::new();
        for &id in &ids {
            slot.construct(counters.make(id));
        }
        prop_assert_eq!(counters.dropped(), ids.len() - 1);
        prop_assert_eq!(slot.get().unwrap().id, *ids.last().unwrap());

        drop(slot);
        prop_assert_eq!(counters.live(), 0);
    }

    #[test]
    fn lazy_get_is_stable(pushes in 1usize..16) {
        let mut lazy: LazyConstructable<Vec<usize>> = LazyConstructable::new();
        for i in 0..pushes {
            lazy.get().push(i);
        }
        prop_assert_eq!(lazy.get().len(), pushes);
    }
}
