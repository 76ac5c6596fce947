// Copyright 2026 the Dressup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor error type.
//!
//! None of these are fatal. A missing instance usually means the UI raced a
//! second gesture against a delete; the editor reports it and leaves the
//! timeline untouched.

use crate::category::Category;
use crate::id::{InstanceId, OutfitId};

/// Reasons an [`OutfitEditor`](crate::editor::OutfitEditor) operation did not
/// commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// No instance with this id exists in the category.
    #[error("no {category} instance {instance:?}")]
    InstanceNotFound {
        /// Category that was searched.
        category: Category,
        /// Id that was not found.
        instance: InstanceId,
    },
    /// A saved outfit name was empty or whitespace only.
    #[error("saved outfit name is blank")]
    BlankName,
    /// No saved outfit with this id is registered.
    #[error("no saved outfit {0:?}")]
    UnknownOutfit(OutfitId),
    /// Every saved outfit id is already in use.
    #[error("saved outfit ids are exhausted")]
    OutfitIdsExhausted,
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn messages_name_the_subject() {
        let e = EditError::InstanceNotFound {
            category: Category::Glasses,
            instance: InstanceId(12),
        };
        assert_eq!(e.to_string(), "no glasses instance InstanceId(12)");
        assert_eq!(
            EditError::UnknownOutfit(OutfitId(3)).to_string(),
            "no saved outfit OutfitId(3)"
        );
        assert_eq!(EditError::BlankName.to_string(), "saved outfit name is blank");
        assert_eq!(
            EditError::OutfitIdsExhausted.to_string(),
            "saved outfit ids are exhausted"
        );
    }
}
