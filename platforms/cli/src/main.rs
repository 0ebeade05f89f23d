use clap::Parser;
use spool::{analyze, by_name, names, Machine, Status, Step, MAX_RUN_STEPS};
use std::thread;
use std::time::Duration;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The built-in program to run
    #[clap(short, long, default_value = "binary-increment")]
    program: String,

    /// Override the initial tape contents (written from index 0)
    #[clap(short, long)]
    input: Option<String>,

    /// Print each lifecycle event and configuration while stepping
    #[clap(short, long)]
    trace: bool,

    /// Delay between steps in milliseconds
    #[clap(short, long)]
    delay_ms: Option<u64>,

    /// Maximum number of steps before giving up
    #[clap(short, long, default_value_t = MAX_RUN_STEPS)]
    max_steps: usize,

    /// List the built-in programs and exit
    #[clap(short, long)]
    list: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        for name in names() {
            let program = by_name(&name).unwrap();
            println!("{:<20} {}", name, program.description);
        }
        return;
    }

    let mut program = match by_name(&cli.program) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Use --list to see the available programs.");
            std::process::exit(1);
        }
    };

    if let Some(input) = &cli.input {
        program.tape = input.clone();
    }

    if let Err(e) = analyze(&program) {
        eprintln!("Warning: {}", e);
    }

    let mut machine = program.machine();

    if cli.trace {
        machine.on_finish(|| println!("  [finish]"));
        machine.on_moved_left(|| println!("  [head moved left]"));
        machine.on_moved_right(|| println!("  [head moved right]"));
        machine.on_cell_changed(|index| println!("  [cell {} written]", index));
        machine.on_state_changed(|state| println!("  [state -> {}]", state));
    }

    // The cadence loop lives here, outside the engine: step, observe, sleep,
    // and stop as soon as the machine reports it has halted.
    let mut steps = 0;
    while steps < cli.max_steps {
        match machine.step() {
            Step::Continue => {
                steps += 1;
                if cli.trace {
                    print_configuration(&machine);
                }
                if let Some(ms) = cli.delay_ms {
                    thread::sleep(Duration::from_millis(ms));
                }
            }
            Step::Halted => break,
        }
    }

    if machine.status() == Status::Halted {
        println!("Halted after {} steps.", machine.step_count());
    } else {
        println!("Gave up after {} steps.", machine.step_count());
    }

    match machine.tape().bounds() {
        Some((from, to)) => {
            println!("Tape [{}..{}]: {}", from, to, machine.tape().text(from, to));
        }
        None => println!("Tape is blank."),
    }
}

fn print_configuration(machine: &Machine) {
    let window = match machine.tape().bounds() {
        Some((from, to)) => machine.tape().text(from.min(machine.head()), to.max(machine.head())),
        None => String::new(),
    };
    println!(
        "Step: {}, State: {}, Head: {}, Tape: [{}]",
        machine.step_count(),
        machine.state(),
        machine.head(),
        window
    );
}
