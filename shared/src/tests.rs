#[cfg(test)]
mod tests {
    use crate::catalog::Catalog;
    use crate::error::VotingError;
    use crate::marker::VoterState;
    use crate::models::{Snapshot, VoteRequest, VoteTally};
    use crate::tally::Tally;

    fn catalog(names: &[&str]) -> Catalog {
        Catalog::new(names.iter().copied()).unwrap()
    }

    fn snapshot(entries: &[(&str, u64)]) -> Snapshot {
        entries.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_catalog_validation() {
        assert!(matches!(Catalog::new(Vec::<String>::new()), Err(VotingError::EmptyCatalog)));
        assert_eq!(
            Catalog::new(["vi", "vim", "vi"]),
            Err(VotingError::DuplicateOption("vi".into()))
        );

        let editors = Catalog::editors();
        assert_eq!(editors.len(), 13);
        assert_eq!(editors.names()[0], "vi");
        assert_eq!(editors.names()[12], "other");
    }

    #[test]
    fn test_catalog_lookup_is_exact() {
        let c = catalog(&["vi", "vim"]);
        assert_eq!(c.position("vim"), Some(1));
        assert_eq!(c.position("Vim"), None);
        assert_eq!(c.position("vim "), None);
        assert_eq!(c.position("v"), None);
        assert_eq!(c.position(""), None);
    }

    #[test]
    fn test_cast_increments_by_one() {
        let mut t = Tally::new(catalog(&["vi", "vim"]));
        assert_eq!(t.counts(), &[0, 0]);

        assert_eq!(t.cast("vim"), Ok(1));
        assert_eq!(t.counts(), &[0, 1]);
        assert_eq!(t.total(), 1);

        t.cast("vim").unwrap();
        t.cast("vi").unwrap();
        assert_eq!(t.counts(), &[1, 2]);
        assert_eq!(t.total(), 3);
        assert_eq!(t.count("vim"), Some(2));
        assert_eq!(t.count("nano"), None);
    }

    #[test]
    fn test_unknown_option_leaves_counts() {
        let mut t = Tally::new(catalog(&["vi", "vim"]));
        t.cast("vi").unwrap();
        assert_eq!(
            t.cast("nonexistent"),
            Err(VotingError::UnknownOption("nonexistent".into()))
        );
        assert_eq!(t.counts(), &[1, 0]);
        assert_eq!(t.total(), 1);
    }

    #[test]
    fn test_seed_honors_known_keys_only() {
        let t = Tally::seeded(
            catalog(&["vi", "vim", "nano"]),
            &snapshot(&[("vim", 5), ("notepad", 40)]),
        );
        assert_eq!(t.counts(), &[0, 5, 0]);
        assert_eq!(t.total(), 5);
        assert!(!t.snapshot().contains_key("notepad"));
    }

    #[test]
    fn test_snapshot_reproduces_counts() {
        let c = catalog(&["vi", "vim", "nano"]);
        let mut t = Tally::new(c.clone());
        for option in ["nano", "vim", "nano"] {
            t.cast(option).unwrap();
        }

        let snap = t.snapshot();
        assert_eq!(snap, snapshot(&[("vi", 0), ("vim", 1), ("nano", 2)]));
        assert_eq!(Tally::seeded(c, &snap), t);
    }

    #[test]
    fn test_summary_is_index_aligned() {
        let mut t = Tally::new(catalog(&["vi", "vim"]));
        t.cast("vim").unwrap();
        let summary = t.summary();
        assert_eq!(
            summary,
            VoteTally {
                editors: vec!["vi".into(), "vim".into()],
                votes: vec![0, 1],
                total: 1,
            }
        );
    }

    #[test]
    fn test_voter_state_from_marker() {
        assert_eq!(VoterState::from_marker(None), VoterState::Unvoted);
        assert_eq!(VoterState::from_marker(Some("false")), VoterState::Unvoted);
        assert_eq!(VoterState::from_marker(Some("TRUE")), VoterState::Unvoted);
        assert_eq!(VoterState::from_marker(Some("")), VoterState::Unvoted);
        assert!(VoterState::from_marker(Some("true")).has_voted());
    }

    #[test]
    fn test_vote_request_shape() {
        let req: VoteRequest = serde_json::from_str(r#"{"editor":"vim","turnstile":"tok"}"#).unwrap();
        assert_eq!(req.editor, "vim");
        assert_eq!(req.turnstile, "tok");

        let empty: VoteRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, VoteRequest::default());

        assert!(serde_json::from_str::<VoteRequest>(r#"{"editor":5}"#).is_err());
        assert!(serde_json::from_str::<VoteRequest>("[]").is_err());
        assert!(serde_json::from_str::<VoteRequest>("not json").is_err());
    }

    #[test]
    fn test_vote_tally_wire_format() {
        let tally = VoteTally {
            editors: vec!["vi".into(), "vim".into()],
            votes: vec![0, 1],
            total: 1,
        };
        assert_eq!(
            serde_json::to_string(&tally).unwrap(),
            r#"{"editors":["vi","vim"],"votes":[0,1],"total":1}"#
        );
    }

    #[test]
    fn test_counts_saturate_instead_of_overflowing() {
        let mut t = Tally::seeded(
            catalog(&["vi", "vim"]),
            &snapshot(&[("vi", u64::MAX), ("vim", 1)]),
        );
        assert_eq!(t.total(), u64::MAX);
        assert_eq!(t.summary().total, u64::MAX);

        assert_eq!(t.cast("vi"), Ok(0));
        assert_eq!(t.counts(), &[u64::MAX, 1]);

        t.cast("vim").unwrap();
        assert_eq!(t.counts(), &[u64::MAX, 2]);
        assert_eq!(t.total(), u64::MAX);
    }
}
