use std::process;

use seeded_dungeon::cli::{CliError, Command, Opts, HELP_TEXT, VERSION};
use seeded_dungeon::{generate, logging, render};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let opts = match Opts::parse() {
        Ok(Command::Generate(opts)) => opts,
        Ok(Command::Help) => {
            println!("{HELP_TEXT}");
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("seeded-dungeon {VERSION}");
            return Ok(());
        }
        Err(err) => exit_with(&err),
    };

    logging::init(opts.log.as_deref());

    let options = match opts.generation_options() {
        Ok(options) => options,
        Err(err) => exit_with(&err),
    };
    if opts.random_seed {
        eprintln!("seed: {}", options.seed);
    }

    // Keep the server alive until generation is done
    let _profiler = if opts.profile {
        puffin::set_scopes_on(true);
        let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        let server = puffin_http::Server::new(&addr).map_err(|e| format!("Failed to start profiler on {addr}: {e}"))?;
        eprintln!("puffin profiler listening on {addr}");
        Some(server)
    } else {
        None
    };

    let dungeon = generate(&options)?;
    puffin::GlobalProfiler::lock().new_frame();

    println!("{}", render(&opts.render, &dungeon));
    Ok(())
}

fn exit_with(err: &CliError) -> ! {
    eprintln!("{err}");
    process::exit(2);
}
