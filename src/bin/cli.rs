use clap::{Parser, Subcommand};
use conquest_mapgen::analysis::survey;
use conquest_mapgen::export::WorldSnapshot;
use conquest_mapgen::report::{full_report, png::ContinentImage};
use conquest_mapgen::{GenerationParams, generate_seeded};
use tracing_subscriber::EnvFilter;

/// Генератор карт для игры на захват территорий
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Сгенерировать один мир и напечатать текст настройки карты
    Generate {
        /// Путь к конфигурационному файлу в формате TOML
        #[arg(short, long)]
        config: Option<String>,

        /// Примерное число стран (перекрывает конфигурацию)
        #[arg(short = 'n', long)]
        countries: Option<usize>,

        /// Сид генератора (перекрывает конфигурацию)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Сохранить PNG-карту континентов
        #[arg(long)]
        png: Option<String>,

        /// Сохранить JSON-снимок мира
        #[arg(long)]
        json: Option<String>,

        /// Не печатать отладочные сетки и сводку
        #[arg(short, long)]
        quiet: bool,
    },
    /// Сгенерировать много миров и посчитать, сколько из них распались на части
    Survey {
        /// Примерное число стран в каждом мире
        #[arg(short = 'n', long, default_value_t = 42)]
        countries: usize,

        /// Сколько миров сгенерировать
        #[arg(short, long, default_value_t = 10_000)]
        worlds: usize,

        /// Сид первого мира; остальные идут подряд
        #[arg(long, default_value_t = 0)]
        first_seed: u64,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            config,
            countries,
            seed,
            png,
            json,
            quiet,
        } => {
            let mut params = match config {
                Some(path) => {
                    tracing::info!("🔍 Загрузка конфигурации из {path}...");
                    GenerationParams::from_toml_file(&path)?
                }
                None => GenerationParams::default(),
            };
            if let Some(countries) = countries {
                params.goal_country_count = countries;
            }
            if seed.is_some() {
                params.seed = seed;
            }
            if png.is_some() {
                params.report.png_path = png;
            }
            if json.is_some() {
                params.report.json_path = json;
            }
            if quiet {
                params.report.print_layouts = false;
            }
            run_generate(&params)
        }
        Command::Survey {
            countries,
            worlds,
            first_seed,
        } => {
            tracing::info!("Генерация {worlds} миров по ~{countries} стран...");
            let report = survey(countries, worlds, first_seed)?;
            println!(
                "Миров: {}, распавшихся: {} ({:.4}%), пустых: {}",
                report.worlds,
                report.disconnected,
                report.disconnected_rate() * 100.0,
                report.empty
            );
            println!(
                "В среднем стран: {:.1}, континентов: {:.1}",
                report.mean_countries, report.mean_continents
            );
            Ok(())
        }
    }
}

fn run_generate(params: &GenerationParams) -> Result<(), Box<dyn std::error::Error>> {
    // Сид выбирается заранее, чтобы любой мир можно было воспроизвести
    let seed = params.seed.unwrap_or_else(rand::random::<u64>);
    tracing::info!(
        "Генерация мира (~{} стран, сид {seed})...",
        params.goal_country_count
    );
    let generation = generate_seeded(params.goal_country_count, seed)?;

    if params.report.print_layouts {
        print!("{}", full_report(&generation));
    }
    if params.report.print_setup {
        print!("{}", generation.world.setup_text());
    }

    if let Some(path) = &params.report.png_path {
        tracing::info!("Сохранение карты континентов в {path}");
        ContinentImage::new(&generation.grid, &generation.world, params.report.cell_pixels)?
            .save_as_png(path)?;
    }
    if let Some(path) = &params.report.json_path {
        tracing::info!("Сохранение снимка мира в {path}");
        WorldSnapshot::from_world(&generation.world).save_as_json(path)?;
    }

    tracing::info!("Готово!");
    Ok(())
}
