//! Tests for command-line parsing and mode orchestration

#[cfg(test)]
mod tests {
    use chinitsu::SolverError;
    use chinitsu::io::cli::{Cli, Runner};
    use chinitsu::io::configuration::DEFAULT_SEED;
    use clap::Parser;
    use std::fs;
    use std::path::PathBuf;

    fn run(args: &[&str]) -> chinitsu::Result<()> {
        Runner::new(Cli::parse_from(args)).run()
    }

    // Tests parsing with no arguments uses defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["chinitsu"]);

        assert_eq!(cli.hand, None);
        assert_eq!(cli.jobs, None);
        assert_eq!(cli.workers(), 1);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert!(cli.should_show_progress());
    }

    // Tests parsing with every option set
    // Verified by swapping the short flags of limit and jobs
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "chinitsu", "-j", "3", "-l", "100", "-o", "out.txt", "-s", "7", "-q",
        ]);

        assert_eq!(cli.workers(), 3);
        assert_eq!(cli.limit, Some(100));
        assert_eq!(cli.output, Some(PathBuf::from("out.txt")));
        assert_eq!(cli.seed, 7);
        assert!(cli.quiet);
        assert!(!cli.should_show_progress());
    }

    // Tests --jobs without a value or with 0 uses every core
    // Verified by treating a bare --jobs as one worker
    #[test]
    fn test_jobs_sentinel() {
        let cores = std::thread::available_parallelism().map_or(1, usize::from);

        let bare = Cli::parse_from(["chinitsu", "--jobs"]);
        assert_eq!(bare.jobs, Some(0));
        assert_eq!(bare.workers(), cores);

        let zero = Cli::parse_from(["chinitsu", "-j", "0"]);
        assert_eq!(zero.workers(), cores);
    }

    // Tests --compare takes exactly two paths and excludes a hand
    // Verified by allowing a hand together with --compare
    #[test]
    fn test_compare_arguments() {
        let cli = Cli::parse_from(["chinitsu", "--compare", "a.log", "b.log"]);
        assert_eq!(
            cli.compare,
            Some(vec![PathBuf::from("a.log"), PathBuf::from("b.log")])
        );

        assert!(Cli::try_parse_from(["chinitsu", "--compare", "a.log"]).is_err());
        assert!(
            Cli::try_parse_from(["chinitsu", "1112224588899", "--compare", "a.log", "b.log"])
                .is_err()
        );
    }

    // Tests limit validation
    // Verified by accepting a zero limit
    #[test]
    fn test_enumeration_config_validation() {
        let zero = Cli::parse_from(["chinitsu", "-l", "0"]).enumeration_config();
        assert!(matches!(zero, Err(SolverError::InvalidParameter { .. })));

        let huge = Cli::parse_from(["chinitsu", "-l", "93601"]).enumeration_config();
        assert!(matches!(huge, Err(SolverError::InvalidParameter { .. })));

        let config = Cli::parse_from(["chinitsu", "-l", "50", "-j", "2"])
            .enumeration_config()
            .unwrap();
        assert_eq!(config.workers, 2);
        assert_eq!(config.limit, Some(50));
    }

    // Tests solving a single hand writes its block
    // Verified by skipping the write of the block
    #[test]
    fn test_run_single_hand() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hand.txt");
        let output = path.to_string_lossy().to_string();

        run(&["chinitsu", "1112224588899", "-q", "-o", &output]).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "1112224588899:\n(111)(222)(888)(99)[45]\n"
        );
    }

    // Tests an invalid hand argument is rejected after the self-check
    // Verified by ignoring the parse error
    #[test]
    fn test_run_invalid_hand() {
        let result = run(&["chinitsu", "111222458889", "-q"]);
        assert!(matches!(result, Err(SolverError::InvalidHand { .. })));
    }

    // Tests a limited parallel enumeration writes one block per hand
    // Verified by writing only the first worker's blocks
    #[test]
    fn test_run_enumeration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let output = path.to_string_lossy().to_string();

        run(&["chinitsu", "-l", "25", "-j", "3", "-q", "-o", &output]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().filter(|line| line.ends_with(':')).count(), 25);
        assert!(text.starts_with("1111222233334:\n"));
    }

    // Tests sampling writes and verifies the requested number of hands
    // Verified by skipping the complete hand checks
    #[test]
    fn test_run_sample() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        let output = path.to_string_lossy().to_string();

        run(&["chinitsu", "--sample", "30", "-s", "5", "-q", "-o", &output]).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().filter(|line| line.ends_with(':')).count(), 30);

        let zero = run(&["chinitsu", "--sample", "0", "-q"]);
        assert!(matches!(zero, Err(SolverError::InvalidParameter { .. })));
    }

    // Tests comparison passes for equal logs and fails for different ones
    // Verified by returning success whatever the comparison found
    #[test]
    fn test_run_compare() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.log");
        let b = dir.path().join("b.log");
        let c = dir.path().join("c.log");
        fs::write(&a, "1112224588899:\n(111)(222)(888)(99)[45]\n").unwrap();
        fs::write(&b, "1112224588899:\n(99)(111)(888)(222)[45]\n").unwrap();
        fs::write(&c, "1112224588899:\n(111)(222)(888)(99)[46]\n").unwrap();
        let [a, b, c] = [a, b, c].map(|path| path.to_string_lossy().to_string());

        run(&["chinitsu", "--compare", &a, &b, "-q"]).unwrap();
        let differ = run(&["chinitsu", "--compare", &a, &c, "-q"]);
        assert!(matches!(differ, Err(SolverError::LogsDiffer { .. })));
    }
}
