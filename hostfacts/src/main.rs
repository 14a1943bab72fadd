use clap::Parser;
use hostfacts::{cli, logging, meta, report, text};
use hostfacts_hal::{LinuxPlatform, ProcFs};

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbosity);

    if cli.man {
        print!("{}", text::SYNOPSIS);
        return Ok(());
    }
    if cli.meta {
        print!("{}", meta::plugin_meta().describe());
        return Ok(());
    }
    if cli.json {
        println!("{}", meta::plugin_meta().to_json()?);
        return Ok(());
    }
    if let Some(dir) = &cli.savejson {
        let path = meta::plugin_meta().save_into(dir)?;
        log::info!("saved plugin representation to {}", path.display());
        return Ok(());
    }

    println!("{}", text::TITLE_BANNER);
    let mut stdout = std::io::stdout().lock();
    report::report(
        env!("CARGO_PKG_VERSION"),
        &LinuxPlatform::new(),
        &ProcFs::default(),
        &mut stdout,
    )?;
    Ok(())
}
