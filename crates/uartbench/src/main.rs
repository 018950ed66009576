use uartbench::{Pattern, SweepConfig};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let words = match args.next() {
        Some(arg) => match arg.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => {
                eprintln!("Invalid word count '{}'. Expected a positive integer.", arg);
                std::process::exit(1);
            }
        },
        None => uartbench::DEFAULT_WORDS,
    };
    let pattern = match args.next().as_deref() {
        Some("counter") | None => Pattern::Counter,
        Some("random") => Pattern::Random,
        Some(other) => {
            eprintln!("Unknown pattern '{}'. Supported: counter, random", other);
            std::process::exit(1);
        }
    };

    let config = SweepConfig::builder().words(words).pattern(pattern).build();
    let report = uartbench::run(config).unwrap();

    if report.mismatches > 0 {
        eprintln!(
            "FAIL: {} of {} words read back wrong",
            report.mismatches, report.words
        );
        std::process::exit(1);
    }
    println!(
        "OK: {} words written and read back over {} ticks",
        report.words, report.ticks
    );
}
