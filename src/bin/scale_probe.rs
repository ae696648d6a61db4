use std::env;
use std::time::Instant;

use chain_dp::problems::matrix_chain::MatrixChainProblem;
use chain_dp::{IntervalEngine, IntervalEngineBuilder};
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("scale_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("chain-dp Scaling Probe: Performance and Correctness Testing");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("Runs the interval DP engine on matrix chains of increasing length and checks:");
    eprintln!("  • Correctness: costs match a plain full-table DP (up to {} matrices)", options.verify_limit);
    eprintln!("  • Performance: wall-clock time and memory usage grow as O(n^3) / O(n^2)");
    eprintln!();
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Minimum cost only...");
    measurements.extend(run_matrix_chain(&options, &mut sys, Mode::CostOnly));
    eprintln!();

    eprintln!("[2/2] Cost with split table and order reconstruction...");
    measurements.extend(run_matrix_chain(&options, &mut sys, Mode::WithOrder));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("scale_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    max_len: usize,
    parallel_threshold: Option<usize>,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 256usize;
        let mut max_len = 1024usize;
        let mut parallel_threshold = None;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_string(), Some(value.to_string())),
                None => (arg.clone(), None),
            };
            let mut value = |name: &str| -> Result<String, String> {
                match inline.clone() {
                    Some(v) => Ok(v),
                    None => args
                        .next()
                        .map(Into::into)
                        .ok_or_else(|| format!("missing value after {name}")),
                }
            };
            match flag.as_str() {
                "--help" | "-h" => {
                    Options::print_help();
                    std::process::exit(0);
                }
                "--format" => format = OutputFormat::from_str(&value("--format")?)?,
                "--verify-limit" => verify_limit = parse_count(&value("--verify-limit")?)?,
                "--max-len" => max_len = parse_count(&value("--max-len")?)?,
                "--parallel-threshold" => {
                    parallel_threshold = Some(parse_count(&value("--parallel-threshold")?)?)
                }
                _ => return Err(format!("unrecognized argument '{arg}'")),
            }
        }

        Ok(Self {
            format,
            verify_limit,
            max_len,
            parallel_threshold,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin scale_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest chain length checked against the baseline (default: 256)
  --max-len <N>                 Largest chain length to run (default: 1024)
  --parallel-threshold <N>      Split evaluations per diagonal before going parallel
  -h, --help                    Print this help message

Examples:
  cargo run --release --bin scale_probe
  cargo run --release --features parallel --bin scale_probe -- --format table --max-len 2048
"
        );
    }
}

fn parse_count(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("expected a positive integer, got '{value}'")),
    }
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

#[derive(Copy, Clone)]
enum Mode {
    CostOnly,
    WithOrder,
}

impl Mode {
    fn scenario(self) -> &'static str {
        match self {
            Mode::CostOnly => "matrix_chain_cost",
            Mode::WithOrder => "matrix_chain_order",
        }
    }
}

#[derive(Clone, Serialize)]
struct Measurement {
    scenario: &'static str,
    size: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    verification: Verification,
}

#[derive(Clone, Serialize)]
struct Verification {
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn run_matrix_chain(options: &Options, sys: &mut System, mode: Mode) -> Vec<Measurement> {
    let sizes: Vec<usize> = std::iter::successors(Some(16usize), |n| n.checked_mul(2))
        .take_while(|&n| n <= options.max_len)
        .collect();
    let total = sizes.len();
    sizes
        .into_iter()
        .enumerate()
        .map(|(idx, len)| {
            eprint!("      [{}/{}] Testing {} matrices... ", idx + 1, total, len);
            let dims = deterministic_dims(len);
            let m = measure(mode.scenario(), len, sys, || {
                let problem = MatrixChainProblem::from_dimensions(&dims);
                let engine = build_engine(problem, options);
                let cost = match mode {
                    Mode::CostOnly => engine.min_cost(),
                    Mode::WithOrder => {
                        let solution = engine.solve();
                        let order = engine.problem().order_from(&solution);
                        let order_cost = order.and_then(|o| o.cost(&engine.problem().chain));
                        if order_cost != Some(solution.cost()) {
                            return Verification {
                                status: VerificationStatus::Failed,
                                detail: Some(format!(
                                    "order cost {order_cost:?} differs from table cost {}",
                                    solution.cost()
                                )),
                            };
                        }
                        solution.cost()
                    }
                };

                if len <= options.verify_limit {
                    let baseline = full_table_cost(&dims);
                    if baseline == cost {
                        Verification {
                            status: VerificationStatus::Passed,
                            detail: None,
                        }
                    } else {
                        Verification {
                            status: VerificationStatus::Failed,
                            detail: Some(format!("expected {baseline}, got {cost}")),
                        }
                    }
                } else {
                    Verification {
                        status: VerificationStatus::NotChecked,
                        detail: None,
                    }
                }
            });
            eprintln!("{} ({:.3}s)", m.verification.status.label(), m.wall_s);
            m
        })
        .collect()
}

fn build_engine(problem: MatrixChainProblem, options: &Options) -> IntervalEngine<MatrixChainProblem> {
    let builder = IntervalEngineBuilder::new(problem);
    match options.parallel_threshold {
        Some(t) => builder.with_parallel_threshold(t).build(),
        None => builder.build(),
    }
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Test Summary");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification.status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len().max(1) as f64;
    eprintln!("Verification Results:");
    eprintln!("  Total tests: {}", measurements.len());
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total);
    eprintln!(
        "  ○ Not checked (size > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total
    );
    eprintln!();

    if failed > 0 {
        eprintln!("Failed Tests:");
        for m in measurements {
            if matches!(m.verification.status, VerificationStatus::Failed) {
                eprintln!(
                    "  {} n={}: {}",
                    m.scenario,
                    m.size,
                    m.verification.detail.as_deref().unwrap_or("")
                );
            }
        }
        eprintln!();
    }
}

fn measure<F>(scenario: &'static str, size: usize, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> Verification,
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let verification = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.verification.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .max()
        .unwrap_or(0)
        .max("scenario".len());

    println!(
        "{:<col1$}  {:>8}  {:>12}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status"
    );
    println!(
        "{:-<col1$}  {:-<8}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", ""
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:>8}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size,
            m.wall_s,
            m.rss_delta_kib,
            m.verification.status.label(),
            m.verification.detail.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    let out = serde_json::to_string_pretty(measurements).map_err(|e| e.to_string())?;
    println!("{out}");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// Repeating but irregular dimensions so the optimal order is non-trivial.
fn deterministic_dims(len: usize) -> Vec<u64> {
    const PATTERN: &[u64] = &[30, 35, 15, 5, 10, 20, 25, 40, 8, 12];
    (0..=len)
        .map(|i| PATTERN[i % PATTERN.len()] + (i / PATTERN.len()) as u64 % 7)
        .collect()
}

fn full_table_cost(p: &[u64]) -> u128 {
    let n = p.len().saturating_sub(1);
    if n < 2 {
        return 0;
    }
    let mut dp = vec![vec![0u128; n]; n];
    for len in 2..=n {
        for i in 0..=(n - len) {
            let j = i + len - 1;
            dp[i][j] = u128::MAX;
            for k in i..j {
                let cand = dp[i][k]
                    + dp[k + 1][j]
                    + u128::from(p[i]) * u128::from(p[k + 1]) * u128::from(p[j + 1]);
                dp[i][j] = dp[i][j].min(cand);
            }
        }
    }
    dp[0][n - 1]
}
