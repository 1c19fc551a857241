//! Revision name resolution
//!
//! Maps a user-supplied name to an object id. Supported forms:
//! - `@`: alias for `HEAD`
//! - A full reference path (`HEAD`, `refs/heads/main`, `refs/tags/v1`)
//! - A short reference name, searched as `refs/<name>`, then
//!   `refs/tags/<name>`, then `refs/heads/<name>` - a tag and a branch
//!   sharing a name resolve to the tag
//! - A full 40-character hex object id, accepted without existence
//!   verification (the first store access checks it)

use crate::areas::refs::Refs;
use crate::artifacts::branch::REF_ALIASES;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::StoreError;

/// A revision name awaiting resolution against a repository's references
#[derive(Debug, Clone)]
pub struct Revision {
    name: String,
}

impl Revision {
    pub fn parse(raw: &str) -> Self {
        let name = REF_ALIASES.get(raw).copied().unwrap_or(raw);
        Revision {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve the name to an object id
    ///
    /// The first existing, fully-dereferenced reference among the
    /// candidate paths wins; otherwise a 40-hex name is taken as a
    /// literal object id. Anything else fails with
    /// [`StoreError::UnknownName`].
    pub fn resolve(&self, refs: &Refs) -> anyhow::Result<ObjectId> {
        let candidates = [
            self.name.clone(),
            format!("refs/{}", self.name),
            format!("refs/tags/{}", self.name),
            format!("refs/heads/{}", self.name),
        ];

        for candidate in &candidates {
            if let Some(oid) = refs.read_oid(candidate)? {
                return Ok(oid);
            }
        }

        if ObjectId::is_valid(&self.name) {
            return ObjectId::try_parse(self.name.clone());
        }

        Err(StoreError::UnknownName(self.name.clone()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::refs::{HEAD_REF_NAME, RefValue};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn oid(fill: char) -> ObjectId {
        ObjectId::try_parse(fill.to_string().repeat(40)).unwrap()
    }

    #[fixture]
    fn refs() -> (assert_fs::TempDir, Refs) {
        let dir = assert_fs::TempDir::new().expect("failed to create temp dir");
        let refs = Refs::new(dir.path().to_path_buf().into_boxed_path());
        (dir, refs)
    }

    #[rstest]
    fn at_sign_aliases_head(refs: (assert_fs::TempDir, Refs)) {
        let (_dir, refs) = refs;

        refs.update_ref(HEAD_REF_NAME, RefValue::Direct(oid('a')), false)
            .unwrap();

        assert_eq!(Revision::parse("@").resolve(&refs).unwrap(), oid('a'));
    }

    #[rstest]
    fn tag_shadows_branch_with_the_same_name(refs: (assert_fs::TempDir, Refs)) {
        let (_dir, refs) = refs;

        refs.update_ref("refs/tags/x", RefValue::Direct(oid('1')), true)
            .unwrap();
        refs.update_ref("refs/heads/x", RefValue::Direct(oid('2')), true)
            .unwrap();

        assert_eq!(Revision::parse("x").resolve(&refs).unwrap(), oid('1'));
    }

    #[rstest]
    fn branch_resolves_when_no_tag_matches(refs: (assert_fs::TempDir, Refs)) {
        let (_dir, refs) = refs;

        refs.update_ref("refs/heads/feature", RefValue::Direct(oid('3')), true)
            .unwrap();

        assert_eq!(
            Revision::parse("feature").resolve(&refs).unwrap(),
            oid('3')
        );
    }

    #[rstest]
    fn forty_hex_characters_resolve_as_a_literal_id(refs: (assert_fs::TempDir, Refs)) {
        let (_dir, refs) = refs;

        let raw = "0123456789abcdef0123456789abcdef01234567";
        assert_eq!(
            Revision::parse(raw).resolve(&refs).unwrap(),
            ObjectId::try_parse(raw.to_string()).unwrap()
        );
    }

    #[rstest]
    fn a_matching_reference_wins_over_the_hex_fallback(refs: (assert_fs::TempDir, Refs)) {
        let (_dir, refs) = refs;

        let hex_looking = "0123456789abcdef0123456789abcdef01234567";
        refs.update_ref(
            &format!("refs/tags/{hex_looking}"),
            RefValue::Direct(oid('9')),
            true,
        )
        .unwrap();

        assert_eq!(
            Revision::parse(hex_looking).resolve(&refs).unwrap(),
            oid('9')
        );
    }

    #[rstest]
    fn unresolvable_names_fail_with_unknown_name(refs: (assert_fs::TempDir, Refs)) {
        let (_dir, refs) = refs;

        let error = Revision::parse("no-such-thing").resolve(&refs).unwrap_err();

        assert!(matches!(
            error.downcast_ref::<StoreError>(),
            Some(StoreError::UnknownName(name)) if name == "no-such-thing"
        ));
    }
}
