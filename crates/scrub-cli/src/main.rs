use anyhow::Result;
use clap::Parser;
use scrub_core::{scrub_and_write, write_report, InputSource, ScrubOptions, TracingSink};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::debug;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(
    name = "scrub",
    version,
    about = "Strip APPn, JPGn and COM segments from a JPEG stream",
    override_usage = "scrub [--report] [[-i] FILE]"
)]
struct Cli {
    /// 原地覆盖输入文件（需要指定 FILE）
    #[arg(short = 'i', long = "in-place", requires = "file")]
    in_place: bool,

    /// 将段报告（JSON）写到 stderr
    #[arg(long)]
    report: bool,

    /// 输入文件；缺省时读取标准输入并写到标准输出
    file: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> ScrubOptions {
        let input = match &self.file {
            Some(path) => InputSource::File(path.clone()),
            None => InputSource::Stdin,
        };
        ScrubOptions { input, in_place: self.in_place }
    }
}

fn main() {
    // 日志写到 stderr，stdout 只承载图像字节
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(&cli.options(), cli.report) {
        eprintln!("scrub: {err:#}");
        std::process::exit(1);
    }
}

fn run(opts: &ScrubOptions, report: bool) -> Result<()> {
    debug!(input = ?opts.input, in_place = opts.in_place, "starting scrub");

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let scrubbed = scrub_and_write(opts, &mut out, TracingSink)?;
    out.flush()?;

    if report {
        write_report(&mut std::io::stderr().lock(), &scrubbed)?;
    }
    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    // 支持通过环境变量 RUST_LOG 控制日志等级；默认只输出告警
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_args_means_stdin() {
        let cli = Cli::try_parse_from(["scrub"]).unwrap();
        let opts = cli.options();
        assert_eq!(opts.input, InputSource::Stdin);
        assert!(!opts.in_place);
    }

    #[test]
    fn single_file_in_place() {
        let cli = Cli::try_parse_from(["scrub", "-i", "photo.jpg"]).unwrap();
        let opts = cli.options();
        assert_eq!(opts.input, InputSource::File(PathBuf::from("photo.jpg")));
        assert!(opts.in_place);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn usage_lists_report_flag() {
        let usage = Cli::command().render_usage().to_string();
        assert!(usage.contains("--report"), "{usage}");
        assert!(usage.contains("[[-i] FILE]"), "{usage}");
    }

    #[test]
    fn report_flag_stays_in_cli() {
        let cli = Cli::try_parse_from(["scrub", "--report", "photo.jpg"]).unwrap();
        assert!(cli.report);
        assert!(!cli.in_place);
        assert_eq!(cli.options().input, InputSource::File(PathBuf::from("photo.jpg")));
    }

    #[test]
    fn in_place_without_file_is_usage_error() {
        let err = Cli::try_parse_from(["scrub", "-i"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn two_files_is_usage_error() {
        let err = Cli::try_parse_from(["scrub", "a.jpg", "b.jpg"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        assert_eq!(err.exit_code(), 2);
    }
}
