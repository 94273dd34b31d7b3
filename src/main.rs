use anyhow::{anyhow, bail, Context};
use clap::Parser;
use imgproxy_url::{GravityType, ImageUrl, ProcessingOption, ResizingType, UrlOption};

/// imgproxy URL builder - prints a signed imgproxy URL for a source image
#[derive(Parser, Debug)]
#[command(name = "imgproxy-url")]
#[command(version, about, long_about = None)]
struct Args {
    /// Source image locator (e.g. s3://bucket/image.jpg)
    source: String,

    /// Target width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Target height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Resizing type (fit, fill, auto)
    #[arg(long)]
    resizing_type: Option<ResizingType>,

    /// Gravity (no, so, ea, we, noea, nowe, soea, sowe, ce, sm)
    #[arg(long)]
    gravity: Option<GravityType>,

    /// Output quality (0-100)
    #[arg(short, long)]
    quality: Option<u8>,

    /// Raw processing option as key:arg:arg (repeatable)
    #[arg(short = 'o', long = "option")]
    options: Vec<String>,

    /// Output format extension
    #[arg(short, long)]
    format: Option<String>,

    /// Emit the source as plain/<escaped> instead of base64
    #[arg(long)]
    plain: bool,

    /// Endpoint prefix (e.g. https://img.example.com)
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Signature truncation in bytes (0 = full)
    #[arg(long, default_value_t = 0)]
    signature_size: usize,

    /// Hex-encoded signing key (falls back to IMGPROXY_KEY)
    #[arg(long)]
    key: Option<String>,

    /// Hex-encoded signing salt (falls back to IMGPROXY_SALT)
    #[arg(long)]
    salt: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    imgproxy_url::logging::init_subscriber(args.log_json).map_err(|e| anyhow!(e))?;

    let options = build_options(&args)?;
    let url = ImageUrl::new(args.source.clone(), options).context("Failed to apply options")?;
    let rendered = url.to_url().context("Failed to build URL")?;

    tracing::debug!(url = %rendered, signed = url.is_signed(), "URL built");

    if args.json {
        let output = serde_json::json!({
            "url": rendered,
            "path": url.path()?,
            "signed": url.is_signed(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", rendered);
    }

    Ok(())
}

fn build_options(args: &Args) -> anyhow::Result<Vec<UrlOption>> {
    let mut options: Vec<UrlOption> = Vec::new();

    if let Some(width) = args.width {
        options.push(ProcessingOption::Width(width).into());
    }
    if let Some(height) = args.height {
        options.push(ProcessingOption::Height(height).into());
    }
    if let Some(resizing_type) = args.resizing_type {
        options.push(ProcessingOption::ResizingType(resizing_type).into());
    }
    if let Some(gravity) = args.gravity {
        options.push(ProcessingOption::Gravity(gravity.into()).into());
    }
    if let Some(quality) = args.quality {
        options.push(ProcessingOption::Quality(quality).into());
    }
    for spec in &args.options {
        options.push(parse_raw(spec)?.into());
    }

    if let Some(format) = &args.format {
        options.push(UrlOption::Format(format.clone()));
    }
    options.push(UrlOption::PlainSource(args.plain));
    if let Some(endpoint) = &args.endpoint {
        options.push(UrlOption::Endpoint(endpoint.clone()));
    }
    options.push(UrlOption::SignatureSize(args.signature_size));

    match (&args.key, &args.salt) {
        (Some(key), Some(salt)) => {
            options.push(UrlOption::Key(key.clone()));
            options.push(UrlOption::Salt(salt.clone()));
        }
        (None, None) => options.push(UrlOption::FromEnv),
        _ => bail!("--key and --salt must be given together"),
    }

    Ok(options)
}

/// Parse `key:arg:arg` into a raw option
fn parse_raw(spec: &str) -> anyhow::Result<ProcessingOption> {
    let mut parts = spec.split(':');
    let key = parts
        .next()
        .filter(|k| !k.is_empty())
        .ok_or_else(|| anyhow!("Option '{}' has no key", spec))?;
    Ok(ProcessingOption::raw(key, parts.map(str::to_string)))
}
