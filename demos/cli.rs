//! Feeds stdin to a session and prints every response, as a connected sender would see them.
//!
//! ```text
//! cargo run --example cli -- [config.toml]
//! ```
//! End the session with `[MSG:Exit]` or end of input.
use std::io::{stdin, Read, Write};
use std::path::Path;

use futures::stream;
use inu_nc::{config::Config, logging, Session};

fn main() {
    let config = match std::env::args().nth(1) {
        Some(path) => match Config::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("{}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    logging::init(&config.logging);

    let input = stream::iter(stdin().lock().bytes().map_while(Result::ok));
    let mut output = Box::pin(futures::sink::unfold((), |(), line: String| async move {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(line.as_bytes())?;
        stdout.flush()
    }));

    let mut session = Session::with_config(config.session);
    if let Err(e) = futures_executor::block_on(session.run(input, &mut output)) {
        eprintln!("output error: {}", e);
    }

    let controller = session.controller();
    println!(
        "units: {:?}, coordinate system: P{}",
        controller.units(),
        controller.coordinate_system().index()
    );
    for (axis, position) in controller.positions().iter() {
        println!("{:?}: {}", axis, position);
    }
}
