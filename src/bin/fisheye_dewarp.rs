use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use fisheye_dewarp::io::{object_from_json, output_path};
use fisheye_dewarp::params::ParamsConfig;
use fisheye_dewarp::{DewarpParams, DewarpResult, ProjectionKind, dewarp_with_params};
use image::ImageReader;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

#[derive(Parser)]
#[command(version, about, author)]
struct DewarpCli {
    /// input fisheye field of view in degrees, 0 < fov <= 180 [default: 180]
    #[arg(long)]
    fov: Option<f64>,

    /// output perspective field of view in degrees, 0 < pfov < 180 [default: 120]
    #[arg(long)]
    pfov: Option<f64>,

    /// path to the input fisheye image, glob patterns are accepted
    #[arg(long, default_value = "images/fisheye.jpg")]
    img: String,

    /// projection type: ["Linear", "EqualArea", "Orthographic", "Stereographic"] [default: Linear]
    #[arg(long)]
    ptype: Option<ProjectionKind>,

    /// json file with "fov", "pfov" and "projection", overridden by the flags above
    #[arg(long)]
    config: Option<PathBuf>,

    /// output folder, defaults to the folder of each input image
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn dewarp_file(path: &Path, params: &DewarpParams, out_dir: Option<&Path>) -> DewarpResult<PathBuf> {
    let img = ImageReader::open(path)?.decode()?;
    let dewarped = dewarp_with_params(&img, params)?;
    let out_path = output_path(path, params, out_dir);
    dewarped.save(&out_path)?;
    Ok(out_path)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = DewarpCli::parse();

    let mut config = match &cli.config {
        Some(p) => object_from_json::<ParamsConfig>(p)?,
        None => ParamsConfig::default(),
    };
    if let Some(fov) = cli.fov {
        config.fov = fov;
    }
    if let Some(pfov) = cli.pfov {
        config.pfov = pfov;
    }
    if let Some(ptype) = cli.ptype {
        config.projection = ptype;
    }
    let params = DewarpParams::try_from(config)?;

    let img_paths: Vec<PathBuf> = glob::glob(&cli.img)?
        .filter_map(|p| p.ok())
        .filter(|p| p.is_file())
        .collect();
    if img_paths.is_empty() {
        return Err(format!("no image found at {}", cli.img).into());
    }
    if let Some(out_dir) = &cli.out_dir {
        std::fs::create_dir_all(out_dir)?;
    }

    let now = Instant::now();
    let results: Vec<_> = img_paths
        .par_iter()
        .progress_count(img_paths.len() as u64)
        .map(|path| (path, dewarp_file(path, &params, cli.out_dir.as_deref())))
        .collect();
    log::info!(
        "dewarped {} image(s) in {:.3} sec",
        img_paths.len(),
        now.elapsed().as_secs_f64()
    );

    let mut failed = 0;
    for (path, result) in results {
        match result {
            Ok(out_path) => println!("{} -> {}", path.display(), out_path.display()),
            Err(e) => {
                log::error!("{}: {}", path.display(), e);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(format!("{} of {} image(s) failed", failed, img_paths.len()).into());
    }
    Ok(())
}
