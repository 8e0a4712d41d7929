//! Tests for order-insensitive log comparison

#[cfg(test)]
mod tests {
    use chinitsu::SolverError;
    use chinitsu::io::compare::{compare_blocks, compare_files, normalize_line, parse_log};
    use std::fs;
    use std::path::Path;

    const LOG: &str = "1122335556799:\n(123)(123)(567)(99)[55]\n(123)(123)(555)(99)[67]\n1111222244446:\n(none)\n";

    // Tests groups within a line are sorted
    // Verified by returning the line unchanged
    #[test]
    fn test_normalize_line() {
        assert_eq!(
            normalize_line("(99)(123)[4]"),
            normalize_line("(123)[4](99)")
        );
        assert_eq!(normalize_line("(none)").as_deref(), Some("(none)"));
        assert!(normalize_line("(123)x").is_none());
        assert!(normalize_line("(123").is_none());
        assert!(normalize_line("()").is_none());
        assert!(normalize_line("").is_none());
    }

    // Tests logs split into blocks with sorted lines
    // Verified by appending lines to a new block each time
    #[test]
    fn test_parse_log() {
        let blocks = parse_log(LOG, Path::new("a.log")).unwrap();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].header(), "1122335556799:");
        assert_eq!(blocks[0].lines().len(), 2);
        assert_eq!(blocks[1].lines(), ["(none)"]);
    }

    // Tests malformed logs are rejected with the line number
    // Verified by attaching orphan lines to a dummy block
    #[test]
    fn test_parse_log_errors() {
        let orphan = parse_log("(123)(123)(567)(99)[55]\n", Path::new("a.log")).unwrap_err();
        assert!(matches!(orphan, SolverError::MalformedLog { line: 1, .. }));

        let empty = parse_log("1111222244446:\n1111333355557:\n(none)\n", Path::new("a.log"));
        assert!(matches!(empty, Err(SolverError::MalformedLog { line: 2, .. })));

        let trailing = parse_log("1111222244446:\n", Path::new("a.log"));
        assert!(matches!(trailing, Err(SolverError::MalformedLog { .. })));

        let garbage = parse_log("1111222244446:\nnot a wait\n", Path::new("a.log"));
        assert!(matches!(garbage, Err(SolverError::MalformedLog { line: 2, .. })));
    }

    // Tests line order and group order do not matter
    // Verified by comparing raw text
    #[test]
    fn test_reordered_logs_match() {
        let reordered = "1122335556799:\n(123)(123)(555)(99)[67]\n(99)(123)(123)(567)[55]\n1111222244446:\n(none)\n";

        let left = parse_log(LOG, Path::new("a.log")).unwrap();
        let right = parse_log(reordered, Path::new("b.log")).unwrap();
        assert!(compare_blocks(&left, &right).is_identical());
    }

    // Tests differing blocks and block counts are reported
    // Verified by ignoring the block count
    #[test]
    fn test_differences_reported() {
        let changed = "1122335556799:\n(123)(123)(567)(99)[55]\n1111222244446:\n(none)\n";
        let left = parse_log(LOG, Path::new("a.log")).unwrap();
        let right = parse_log(changed, Path::new("b.log")).unwrap();

        let comparison = compare_blocks(&left, &right);
        assert!(!comparison.is_identical());
        assert_eq!(comparison.differences.len(), 1);
        assert_eq!(comparison.differences[0].0.header(), "1122335556799:");

        let shorter = compare_blocks(&left, &left[..1]);
        assert!(!shorter.is_identical());
        assert!(shorter.differences.is_empty());
        assert_eq!(shorter.right_blocks, 1);
    }

    // Tests comparing files from disk, including a missing one
    // Verified by reading the same file twice
    #[test]
    fn test_compare_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.log");
        let b = dir.path().join("b.log");
        fs::write(&a, LOG).unwrap();
        fs::write(&b, LOG).unwrap();

        assert!(compare_files(&a, &b).unwrap().is_identical());

        let missing = dir.path().join("missing.log");
        assert!(matches!(
            compare_files(&a, &missing),
            Err(SolverError::FileSystem { .. })
        ));
    }
}
