use clap::Parser;
use dungeon_mapgen::title::random_title;
use dungeon_mapgen::{GeneratedMap, GenerationParams, generate_batch, generate_map};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::time::Instant;

/// Генератор планов подземелий
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Путь к конфигурационному файлу в формате TOML
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Сид генератора (перекрывает значение из конфигурации)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Длина стороны сетки
    #[arg(long)]
    size: Option<usize>,

    /// Предел числа попыток генерации
    #[arg(long)]
    max_attempts: Option<u64>,

    /// Сколько карт сгенерировать (сиды seed, seed + 1, ...)
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    count: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut params = match &cli.config {
        Some(path) => {
            println!("🔍 Загрузка конфигурации...");
            GenerationParams::from_toml_file(path.to_str().ok_or("config path is not UTF-8")?)?
        }
        None => GenerationParams::default(),
    };
    if let Some(seed) = cli.seed {
        params.seed = seed;
    }
    if let Some(size) = cli.size {
        params.grid_size = size;
    }
    if cli.max_attempts.is_some() {
        params.max_attempts = cli.max_attempts;
    }

    println!(
        "Генерация этажа (сетка {}×{}, сид {})...",
        params.grid_size, params.grid_size, params.seed
    );
    let started = Instant::now();

    if cli.count == 1 {
        let map = generate_map(&params)?;
        let elapsed = started.elapsed();
        print_map(&map, params.seed);
        println!("Runtime: {:.6} seconds", elapsed.as_secs_f64());
    } else {
        let maps = generate_batch(&params, cli.count);
        let elapsed = started.elapsed();
        for (i, map) in maps.into_iter().enumerate() {
            let seed = params.seed.wrapping_add(i as u64);
            match map {
                Ok(map) => print_map(&map, seed),
                Err(err) => println!("❌ Сид {seed}: {err}"),
            }
        }
        println!("Runtime: {:.6} seconds", elapsed.as_secs_f64());
    }

    println!("\nГотово!");
    Ok(())
}

fn print_map(map: &GeneratedMap, seed: u64) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    println!("\n== {} ==", random_title(&mut rng));
    print!("{}", map.grid);
    println!(
        "Старт {} → финиш {}, комнат: {}, попыток: {}",
        map.start, map.finish, map.rooms_placed, map.attempts
    );
}
