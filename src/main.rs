//! turnlock CLI
//!
//! Usage:
//!   turnlock --codes "5,5,5,5"               # One-shot feed
//!   turnlock --replay codes.txt              # Replay a recorded code stream
//!   turnlock --interactive                   # Type codes on stdin
//!   turnlock --codes "5,5,5,5" --auto-accept # Skip the confirmation prompt
//!   turnlock --codes "5,5,5,5" --json        # JSON output

use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use turnlock::core::{
    run_session, save_log, AutoOracle, ConfirmationOracle, ConsoleOracle, Stabilizer,
};
use turnlock::types::{IngestOutput, RawCode};
use turnlock::{COOLDOWN_MS, DEFAULT_LISTEN_SECS, STABILITY_THRESHOLD, VERSION};

#[derive(Parser, Debug)]
#[command(
    name = "turnlock",
    version = VERSION,
    about = "Megaminx turn listener - stabilize, confirm, and log face turns",
    long_about = "turnlock turns a noisy stream of face-turn sensor codes into a\n\
                  clean, human-confirmed log of discrete turn events.\n\n\
                  Codes 1-12 are clockwise turns of faces 1-12; 13-24 are the\n\
                  counter-clockwise turns of the same faces.\n\n\
                  Modes:\n  \
                  --codes        One-shot comma-separated feed\n  \
                  --replay       Replay codes from a file (one per line)\n  \
                  --interactive  Type codes on stdin"
)]
struct Args {
    /// Comma-separated raw codes to feed once, e.g. "5,5,5,5"
    #[arg(short, long)]
    codes: Option<String>,

    /// Replay codes from a file (one per line, '#' comments allowed)
    #[arg(short, long)]
    replay: Option<String>,

    /// Interactive mode - type codes on stdin
    #[arg(short, long)]
    interactive: bool,

    /// Listening window for replay sessions (seconds)
    #[arg(long, default_value_t = DEFAULT_LISTEN_SECS)]
    listen_secs: u64,

    /// Delay between replayed codes (milliseconds)
    #[arg(long, default_value_t = 0)]
    feed_delay_ms: u64,

    /// Answer every confirmation with yes
    #[arg(long)]
    auto_accept: bool,

    /// Answer every confirmation with no
    #[arg(long)]
    auto_reject: bool,

    /// Cooldown after a confirmed turn (milliseconds)
    #[arg(long, default_value_t = COOLDOWN_MS)]
    cooldown_ms: u64,

    /// Repeats required in the recent window before a code is a candidate
    #[arg(long, default_value_t = STABILITY_THRESHOLD)]
    stability: usize,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show gate details per arrival
    #[arg(long)]
    verbose: bool,

    /// Directory for saved turn logs (default: ./turnlogs)
    #[arg(long, default_value = "./turnlogs")]
    log_dir: String,

    /// Disable saving the log at session end
    #[arg(long)]
    no_save: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let mut stabilizer = Stabilizer::new()
        .with_cooldown(Duration::from_millis(args.cooldown_ms))
        .with_stability_threshold(args.stability);
    let mut oracle = make_oracle(&args);

    if let Some(ref codes) = args.codes {
        run_codes(codes, &mut stabilizer, oracle.as_mut(), &args);
    } else if let Some(ref path) = args.replay {
        run_replay(path, &mut stabilizer, oracle.as_mut(), &args).await;
    } else {
        // Default to interactive if no mode specified
        run_interactive(&mut stabilizer, oracle.as_mut(), &args);
    }

    print_report(&stabilizer, &args);

    if !args.no_save && !stabilizer.log().is_empty() {
        match save_log(stabilizer.log(), &args.log_dir) {
            Ok(path) => println!("{}", format!("Log saved: {}", path).cyan()),
            Err(e) => eprintln!("{}", format!("Log save failed: {}", e).red()),
        }
    }
}

/// Pick the confirmation oracle for this run
fn make_oracle(args: &Args) -> Box<dyn ConfirmationOracle> {
    if args.auto_accept {
        Box::new(AutoOracle::accept())
    } else if args.auto_reject {
        Box::new(AutoOracle::reject())
    } else {
        Box::new(ConsoleOracle::new())
    }
}

/// Feed a one-shot comma-separated code list
fn run_codes(codes: &str, stabilizer: &mut Stabilizer, oracle: &mut dyn ConfirmationOracle, args: &Args) {
    for part in codes.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        match part.parse::<RawCode>() {
            Ok(code) => {
                let output = stabilizer.ingest(code, Instant::now(), oracle);
                print_output(&output, args);
            }
            Err(_) => print_warning(&format!("skipping invalid code {:?}", part), args.no_color),
        }
    }
}

/// Replay a recorded code stream through a channel-driven session
async fn run_replay(path: &str, stabilizer: &mut Stabilizer, oracle: &mut dyn ConfirmationOracle, args: &Args) {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Cannot read {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let mut codes: Vec<RawCode> = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.parse::<RawCode>() {
            Ok(code) => codes.push(code),
            Err(_) => print_warning(&format!("skipping invalid line {:?}", line), args.no_color),
        }
    }

    print_header("Replay", args.no_color);
    println!("Replaying {} codes from {}", codes.len(), path);
    println!();

    let (tx, rx) = tokio::sync::mpsc::channel(64);
    let delay = Duration::from_millis(args.feed_delay_ms);
    let feeder = tokio::spawn(async move {
        for code in codes {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            if tx.send(code).await.is_err() {
                break;
            }
        }
    });

    let json = args.json;
    let no_color = args.no_color;
    let verbose = args.verbose;
    run_session(
        rx,
        stabilizer,
        oracle,
        Duration::from_secs(args.listen_secs),
        |output| print_output_raw(output, json, no_color, verbose),
    )
    .await;

    let _ = feeder.await;
}

/// Interactive mode - codes typed on stdin, confirmations on stdin too
fn run_interactive(stabilizer: &mut Stabilizer, oracle: &mut dyn ConfirmationOracle, args: &Args) {
    print_header("Interactive", args.no_color);
    println!("Type a raw code (1-24) and press Enter. Type 'quit' to exit.");
    println!(
        "A turn fires after {} repeats within the last 4 readings.",
        args.stability
    );
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let prompt = format_prompt(stabilizer, args.no_color);
        print!("{}", prompt);
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Arrivals: {}", stabilizer.ingest_count());
            break;
        }
        if line.is_empty() {
            continue;
        }

        match line.parse::<RawCode>() {
            Ok(code) => {
                let output = stabilizer.ingest(code, Instant::now(), oracle);
                print_output(&output, args);
            }
            Err(_) => print_warning("enter a number between 1 and 24", args.no_color),
        }
    }
}

/// Format the interactive prompt with log size and current window
fn format_prompt(stabilizer: &Stabilizer, no_color: bool) -> String {
    let window = stabilizer
        .history()
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    if no_color {
        format!("[turns={} | window: {}] > ", stabilizer.log().len(), window)
    } else {
        format!(
            "\x1b[90m[turns={} | window: {}]\x1b[0m > ",
            stabilizer.log().len(),
            window
        )
    }
}

/// Print one per-arrival output
fn print_output(output: &IngestOutput, args: &Args) {
    print_output_raw(output, args.json, args.no_color, args.verbose);
}

fn print_output_raw(output: &IngestOutput, json: bool, no_color: bool, verbose: bool) {
    if json {
        println!("{}", serde_json::to_string(output).unwrap_or_default());
        return;
    }

    if no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }

    if verbose {
        let gray = if no_color { "" } else { "\x1b[90m" };
        let reset = if no_color { "" } else { "\x1b[0m" };
        match output.cooldown_remaining_ms {
            Some(ms) => println!(
                "{}  └─ {} ({} ms of cooldown left){}",
                gray,
                output.reason.description(),
                ms,
                reset
            ),
            None => println!("{}  └─ {}{}", gray, output.reason.description(), reset),
        }
    }
}

/// Print a warning line
fn print_warning(message: &str, no_color: bool) {
    if no_color {
        println!("⚠ {}", message);
    } else {
        println!("\x1b[33m⚠ {}\x1b[0m", message);
    }
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  turnlock v{} - {}", VERSION, mode);
        println!("========================================");
    } else {
        println!("{}", "========================================".bold());
        println!("{}", format!("  turnlock v{} - {}", VERSION, mode).bold());
        println!("{}", "========================================".bold());
    }
    println!();
}

/// End-of-session report: the accumulated turn log
fn print_report(stabilizer: &Stabilizer, args: &Args) {
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(stabilizer.log()).unwrap_or_default()
        );
        return;
    }

    println!();
    if args.no_color {
        println!("Confirmed turns: {}", stabilizer.log().len());
    } else {
        println!(
            "{}",
            format!("Confirmed turns: {}", stabilizer.log().len()).bold()
        );
    }

    for (i, event) in stabilizer.log().events().iter().enumerate() {
        if args.no_color {
            println!(
                "  {:>3}. {}  {} {}",
                i + 1,
                event.timestamp.format("%H:%M:%S%.3f"),
                event.face,
                event.direction
            );
        } else {
            println!(
                "  {:>3}. {}  {} {} {}",
                i + 1,
                event.timestamp.format("%H:%M:%S%.3f").to_string().dimmed(),
                event.face.to_string().green(),
                event.direction,
                event.direction.arrow()
            );
        }
    }
}
