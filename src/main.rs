use anyhow::Result;
use clap::Parser;
use pegsol::console::Console;
use pegsol::save::SAVE_FILE;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Cross-board peg solitaire in the terminal", long_about = None)]
struct Args {
    /// Path of the save file
    #[arg(long, default_value = SAVE_FILE)]
    save_file: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    Console::new(args.save_file).run_loop()?;
    Ok(())
}
