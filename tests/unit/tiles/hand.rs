//! Tests for hand parsing, count bounds and copy-on-branch updates

#[cfg(test)]
mod tests {
    use chinitsu::SolverError;
    use chinitsu::algorithm::catalog::Catalog;
    use chinitsu::tiles::hand::{Hand, tile_index};

    fn hand(text: &str) -> Hand {
        Hand::parse(text).unwrap()
    }

    // Tests a well-formed line parses into the expected counts
    // Verified by skipping the count increment for repeated digits
    #[test]
    fn test_parse_valid_hand() {
        let parsed = hand("1112224588899");

        assert_eq!(parsed.len(), 13);
        assert_eq!(parsed.count(1), 3);
        assert_eq!(parsed.count(3), 0);
        assert_eq!(parsed.count(8), 3);
        assert_eq!(parsed.to_string(), "1112224588899");
    }

    // Tests digit order in the input does not matter
    // Verified by displaying tiles in insertion order
    #[test]
    fn test_parse_unsorted_hand() {
        let parsed = hand("9998887776665");
        assert_eq!(parsed.to_string(), "5666777888999");
    }

    // Tests only the first token of the line is read
    // Verified by parsing the whole line
    #[test]
    fn test_parse_reads_first_token() {
        let parsed = hand("  1122335556799 trailing words");
        assert_eq!(parsed.to_string(), "1122335556799");
    }

    // Tests malformed inputs are rejected as invalid hands
    // Verified by removing the length check
    #[test]
    fn test_parse_rejects_malformed_input() {
        for input in [
            "111222458889",
            "111222458889x",
            "0001112223334",
            "11111222333444",
            "11112222333344",
            "",
        ] {
            let result = Hand::parse(input);
            assert!(
                matches!(result, Err(SolverError::InvalidHand { .. })),
                "{input:?} should be rejected"
            );
        }
    }

    // Tests a fifth copy cannot be added
    // Verified by raising the copy limit to five
    #[test]
    fn test_add_refuses_fifth_copy() {
        let base = hand("1111222233334");

        assert!(base.add(1).is_none());
        assert!(base.add(0).is_none());
        assert!(base.add(10).is_none());

        let added = base.add(4).unwrap();
        assert_eq!(added.count(4), 2);
        assert_eq!(added.len(), 14);
        assert_eq!(base.count(4), 1);
    }

    // Tests removal fails when too few copies are held
    // Verified by saturating the subtraction instead of failing
    #[test]
    fn test_remove_requires_enough_copies() {
        let base = hand("1111222233334");

        assert!(base.remove(4, 2).is_none());
        let removed = base.remove(1, 2).unwrap();
        assert_eq!(removed.count(1), 2);
        assert_eq!(removed.len(), 11);
    }

    // Tests taking a group removes one copy of each member
    // Verified by removing only the first member
    #[test]
    fn test_take_group() {
        let catalog = Catalog::global();
        let base = hand("1111222233334");

        let rest = base.take(catalog.run(1).unwrap()).unwrap();
        assert_eq!(rest.counts(), &[3, 3, 3, 1, 0, 0, 0, 0, 0]);

        assert!(base.take(catalog.run(5).unwrap()).is_none());
        assert!(base.take(catalog.triple(4).unwrap()).is_none());
    }

    // Tests lowest tile lookup including the empty case
    // Verified by returning the highest present tile
    #[test]
    fn test_lowest() {
        assert_eq!(Hand::empty().lowest(), None);
        let tiles = Hand::from_tiles([5, 3, 9]).unwrap();
        assert_eq!(tiles.lowest(), Some(3));
        assert_eq!(tiles.presence().to_vec(), vec![3, 5, 9]);
    }

    // Tests tiles come out ascending and repeated by count
    // Verified by emitting each value once
    #[test]
    fn test_tiles_ascending() {
        let tiles: Vec<u8> = Hand::from_tiles([7, 2, 7, 1]).unwrap().tiles().collect();
        assert_eq!(tiles, vec![1, 2, 7, 7]);
    }

    // Tests merging respects the copy bound
    // Verified by skipping the bound check during merge
    #[test]
    fn test_merge() {
        let left = Hand::from_tiles([1, 1, 1]).unwrap();
        let right = Hand::from_tiles([1, 2]).unwrap();

        let merged = left.merge(&right).unwrap();
        assert_eq!(merged.count(1), 4);
        assert_eq!(merged.count(2), 1);
        assert!(merged.merge(&right).is_none());
    }

    // Tests construction bounds and the full wall
    // Verified by accepting counts above four
    #[test]
    fn test_counts_and_wall() {
        assert!(Hand::from_counts([5, 0, 0, 0, 0, 0, 0, 0, 0]).is_none());
        assert_eq!(
            Hand::from_counts([4, 0, 0, 0, 0, 0, 0, 0, 1]).unwrap().len(),
            5
        );
        assert_eq!(Hand::wall().len(), 36);
        assert!(Hand::empty().is_empty());
        assert_eq!(tile_index(1), Some(0));
        assert_eq!(tile_index(9), Some(8));
        assert_eq!(tile_index(0), None);
    }
}
