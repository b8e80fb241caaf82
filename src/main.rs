mod base;
mod cli;
mod doc;
mod pipeline;

fn main() {
    fn try_main() -> anyhow::Result<()> {
        let root = <cli::Root as clap::Parser>::parse();
        let output = root.run()?;
        print!("{}", output);
        Ok(())
    }

    if let Err(e) = try_main() {
        eprint!("error");
        e.chain().for_each(|cause| eprint!(": {}", cause));
        eprintln!();
        std::process::exit(1);
    }
}
