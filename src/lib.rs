// Copyright (c) Sienna Satterwhite, CesiumDB Contributors
// SPDX-License-Identifier: GPL-3.0-only WITH Classpath-exception-2.0

//! An in-memory ordered set built on a [`skip list`] with sentinel bounds,
//! order-statistics queries and periodic rebuilds into evenly leveled form.
//!
//! ```
//! use cesium_skiplist::SkipList;
//!
//! let mut list = SkipList::new(8, i32::MIN, i32::MAX).unwrap();
//! for x in [93, 46, 32, 36, 6] {
//!     list.insert(x).unwrap();
//! }
//! assert_eq!(list.first(), Some(&6));
//! assert_eq!(list.floor(&40), Some(&36));
//! assert_eq!(list.ceiling(&40), Some(&46));
//! assert_eq!(list.to_string(), "6 32 36 46 93");
//! ```
//!
//! [`skip list`]: https://en.wikipedia.org/wiki/Skip_list

pub mod config;
pub mod errs;
pub mod skiplist;
pub mod stats;

pub use crate::{
    config::SkipListConfig,
    errs::SkipListError,
    skiplist::{
        iter::{
            IntoIter,
            Iter,
        },
        level_generator::{
            GeometricalLevelGenerator,
            LevelGenerator,
        },
        skiplist::SkipList,
    },
    stats::SkipListStats,
};
