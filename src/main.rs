use std::time::Instant;

use cpu_time::ProcessTime;

mod cli;

use cli::get_cli;
use db_maker::gen::{generate_records, write_records_stdout};

fn main() {
    if let Err(err) = _main() {
        eprintln!("error: {}", &err);
        std::process::exit(1);
    }
}

fn _main() -> Result<(), Box<dyn std::error::Error>> {
    let start_f = Instant::now();
    let startcpu = ProcessTime::now();

    let cfg = get_cli()?;

    if cfg.stdout {
        let bytes = write_records_stdout(cfg.records)?;
        if cfg.verbose >= 1 {
            eprintln!("wrote {} records ({} bytes) to stdout", cfg.records, bytes);
        }
    } else {
        let path = cfg.output_path();
        let bytes = generate_records(&path, cfg.records)?;
        if cfg.verbose >= 1 {
            eprintln!("wrote {} records ({} bytes) to {}", cfg.records, bytes, path.display());
        }
    }

    if cfg.verbose > 1 {
        let elapsed = start_f.elapsed();
        let elapsedcpu = startcpu.elapsed();
        eprintln!("runtime: {:.3} secs  cpu: {:.3} secs", elapsed.as_secs_f64(), elapsedcpu.as_secs_f64());
    }
    Ok(())
}
