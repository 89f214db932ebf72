use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;

use bf_app::{
    AnalysisDef, AppError, AppResult, BodeReport, ResponseCache, SweepConfig, load_analysis_file,
    run_analysis, validate_analysis_file, write_csv_file, write_json_report,
};
use bf_lti::{PadeOptions, approximate};
use bf_response::{SingularPolicy, SweepSpacing};

#[derive(Parser)]
#[command(name = "bf-cli")]
#[command(about = "BodeFlow CLI - Bode analysis of transfer functions with time delay", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Padé approximant of a pure time delay
    Pade {
        /// Delay in seconds
        #[arg(long)]
        delay: f64,
        /// Denominator degree (approximation order)
        #[arg(long, default_value_t = 1)]
        order: usize,
        /// Numerator degree (defaults to the order)
        #[arg(long, allow_negative_numbers = true)]
        numdeg: Option<i64>,
    },
    /// Evaluate the Bode response of a single transfer function
    Bode {
        /// Numerator coefficients, highest power first (e.g. 1,1)
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, default_value = "1")]
        num: Vec<f64>,
        /// Denominator coefficients, highest power first (e.g. 10,1)
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true, default_value = "1")]
        den: Vec<f64>,
        /// Pure time delay in seconds
        #[arg(long)]
        delay: Option<f64>,
        /// Padé approximation order
        #[arg(long, default_value_t = 1)]
        order: usize,
        /// Padé numerator degree
        #[arg(long, allow_negative_numbers = true)]
        numdeg: Option<i64>,
        /// Lowest sweep frequency in rad/s
        #[arg(long, default_value_t = bf_response::sweep::DEFAULT_START_RADPS)]
        start: f64,
        /// Highest sweep frequency in rad/s
        #[arg(long, default_value_t = bf_response::sweep::DEFAULT_STOP_RADPS)]
        stop: f64,
        /// Number of frequency samples
        #[arg(long, default_value_t = bf_response::sweep::DEFAULT_POINTS)]
        points: usize,
        /// Space samples logarithmically
        #[arg(long)]
        log: bool,
        /// Drop singular samples instead of failing
        #[arg(long)]
        skip_singular: bool,
        /// Output CSV file path
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Limit the CSV to the plot's frequency window
        #[arg(long)]
        clip: bool,
        /// Output JSON report path
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Validate an analysis file
    Validate {
        /// Path to the analysis YAML or JSON file
        analysis_path: PathBuf,
    },
    /// Run every analysis in a file and export one CSV per analysis
    Run {
        /// Path to the analysis YAML or JSON file
        analysis_path: PathBuf,
        /// Run only the named analysis
        #[arg(long)]
        only: Option<String>,
        /// Directory for exported CSV files (defaults to the current directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Also write a JSON report per analysis
        #[arg(long)]
        json: bool,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pade {
            delay,
            order,
            numdeg,
        } => cmd_pade(delay, order, numdeg),
        Commands::Bode {
            num,
            den,
            delay,
            order,
            numdeg,
            start,
            stop,
            points,
            log,
            skip_singular,
            output,
            clip,
            json,
        } => {
            let mut def = AnalysisDef::new("bode");
            def.numerator = num;
            def.denominator = den;
            def.delay = delay;
            def.pade = PadeOptions {
                order,
                numerator_degree: numdeg,
            };
            def.sweep = SweepConfig {
                start,
                stop,
                points,
                spacing: if log {
                    SweepSpacing::Logarithmic
                } else {
                    SweepSpacing::Linear
                },
            };
            if skip_singular {
                def.on_singular = SingularPolicy::Skip;
            }
            cmd_bode(&def, output.as_deref(), clip, json.as_deref())
        }
        Commands::Validate { analysis_path } => cmd_validate(&analysis_path),
        Commands::Run {
            analysis_path,
            only,
            out_dir,
            json,
        } => cmd_run(&analysis_path, only.as_deref(), out_dir.as_deref(), json),
    }
}

fn cmd_pade(delay: f64, order: usize, numdeg: Option<i64>) -> AppResult<()> {
    let pade = approximate(delay, order, numdeg)?;
    let (p, q) = pade.degrees();
    println!("[{}/{}] Padé approximant of exp(-{} s):", p, q, delay);
    println!("  numerator:   {:?}", pade.numerator().coeffs());
    println!("  denominator: {:?}", pade.denominator().coeffs());
    println!();
    println!("{}", pade);
    Ok(())
}

fn cmd_bode(
    def: &AnalysisDef,
    output: Option<&Path>,
    clip: bool,
    json: Option<&Path>,
) -> AppResult<()> {
    let mut cache = ResponseCache::new(0);
    let report = run_analysis(def, &mut cache)?;
    print_report(&report);

    if let Some(path) = output {
        if clip {
            write_csv_file(path, &report.visible_response())?;
        } else {
            write_csv_file(path, &report.response)?;
        }
        println!("✓ Wrote {}", path.display());
    }
    if let Some(path) = json {
        write_json_report(path, &report)?;
        println!("✓ Wrote {}", path.display());
    }
    Ok(())
}

fn cmd_validate(analysis_path: &Path) -> AppResult<()> {
    println!("Validating analysis file: {}", analysis_path.display());
    let file = load_analysis_file(analysis_path)?;
    validate_analysis_file(&file)?;
    println!("✓ {} analyses are valid", file.analyses.len());
    Ok(())
}

fn cmd_run(
    analysis_path: &Path,
    only: Option<&str>,
    out_dir: Option<&Path>,
    json: bool,
) -> AppResult<()> {
    let started = Instant::now();
    let file = load_analysis_file(analysis_path)?;
    validate_analysis_file(&file)?;

    let selected: Vec<&AnalysisDef> = match only {
        Some(name) => {
            let def = file
                .analyses
                .iter()
                .find(|a| a.name == name)
                .ok_or_else(|| AppError::AnalysisNotFound(name.to_string()))?;
            vec![def]
        }
        None => file.analyses.iter().collect(),
    };

    let out_dir = out_dir.unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(out_dir).map_err(|e| AppError::FileWrite {
        path: out_dir.to_path_buf(),
        source: e,
    })?;

    tracing::info!(
        path = %analysis_path.display(),
        analyses = selected.len(),
        "running analysis file"
    );
    let mut cache = ResponseCache::default();
    for def in selected {
        println!("Running analysis: {}", def.name);
        let report = run_analysis(def, &mut cache)?;
        print_report(&report);

        let csv_path = out_dir.join(format!("{}.csv", def.name));
        write_csv_file(&csv_path, &report.response)?;
        println!("  ✓ {}", csv_path.display());
        if json {
            let json_path = out_dir.join(format!("{}.json", def.name));
            write_json_report(&json_path, &report)?;
            println!("  ✓ {}", json_path.display());
        }
    }

    println!(
        "Completed in {:.3} s ({} cache hits)",
        started.elapsed().as_secs_f64(),
        cache.hits()
    );
    Ok(())
}

fn print_report(report: &BodeReport) {
    println!("{}", report.model);
    if report.from_cache {
        println!("  (response loaded from cache)");
    }
    print!("{}", report.summary());
}
