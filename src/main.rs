use std::fs;
use std::io::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;

use rebarkit::{
    compute_cost_with_catalog, format_money, init_logging, layout_shape, price_rows, render_svg,
    BendShape, CalculationResult, CalculatorSettings, ClientIdentity, Config, HtmlRenderer,
    PricingInputs, Quotation, QuotationRenderer, RebarCatalog, ShapeKind, TextRenderer, Viewport,
};

#[derive(Parser)]
#[command(name = "rebarkit")]
#[command(version, about = "Rebar bending cost calculator and quotation generator")]
struct Cli {
    /// Configuration file (JSON or TOML); hard-coded defaults apply when absent
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the rebar catalog
    Catalog(CatalogArgs),
    /// Compute the cost breakdown for a bent shape
    Cost(CostArgs),
    /// Write an SVG preview of a bent shape
    Preview(PreviewArgs),
    /// Generate a client quotation document
    Quote(QuoteArgs),
}

#[derive(Args)]
struct ShapeArgs {
    /// Shape family: rectangle, l or u
    #[arg(long)]
    shape: Option<ShapeKind>,
    /// Width in cm (rectangle width or U base)
    #[arg(long)]
    width: Option<f64>,
    /// Height in cm (rectangle only)
    #[arg(long)]
    height: Option<f64>,
    /// Splice/overlap length in cm (rectangle only)
    #[arg(long)]
    overlap: Option<f64>,
    /// First arm length in cm (L and U)
    #[arg(long)]
    arm1: Option<f64>,
    /// Second arm length in cm (L only)
    #[arg(long)]
    arm2: Option<f64>,
    /// Third arm length in cm (U only)
    #[arg(long)]
    arm3: Option<f64>,
}

impl ShapeArgs {
    fn resolve(&self, defaults: &CalculatorSettings) -> BendShape {
        let kind = self.shape.unwrap_or(defaults.default_shape);
        let dim = defaults.default_dimension_cm;
        match kind {
            ShapeKind::Rectangle => BendShape::Rectangle {
                width: self.width.unwrap_or(dim),
                height: self.height.unwrap_or(dim),
                overlap_length: self.overlap.unwrap_or(defaults.default_overlap_cm),
            },
            ShapeKind::LBar => BendShape::LBar {
                arm1_length: self.arm1.unwrap_or(dim),
                arm2_length: self.arm2.unwrap_or(dim),
            },
            ShapeKind::UBar => BendShape::UBar {
                arm1_length: self.arm1.unwrap_or(dim),
                width: self.width.unwrap_or(dim),
                arm3_length: self.arm3.unwrap_or(dim),
            },
        }
    }
}

#[derive(Args)]
struct PricingArgs {
    /// Bar diameter in millimeters
    #[arg(long)]
    diameter: Option<u32>,
    /// Margin percentage, 0-100
    #[arg(long)]
    margin: Option<f64>,
    /// Number of pieces
    #[arg(long)]
    quantity: Option<u32>,
    /// Override a catalog unit weight, e.g. --set-weight 8=0.395
    #[arg(long = "set-weight", value_name = "DIA=KG_PER_M")]
    set_weight: Vec<String>,
    /// Override a catalog price, e.g. --set-price 8=3.10
    #[arg(long = "set-price", value_name = "DIA=PRICE")]
    set_price: Vec<String>,
}

impl PricingArgs {
    fn catalog(&self) -> Result<RebarCatalog> {
        build_catalog(&self.set_weight, &self.set_price)
    }

    fn pricing(&self, defaults: &CalculatorSettings) -> PricingInputs {
        PricingInputs::new(
            self.margin.unwrap_or(defaults.default_margin_percent),
            self.quantity.unwrap_or(defaults.default_quantity),
        )
    }

    fn diameter(&self, defaults: &CalculatorSettings) -> u32 {
        self.diameter.unwrap_or(defaults.default_diameter_mm)
    }
}

#[derive(Args)]
struct ViewportArgs {
    /// Viewport width in drawing units
    #[arg(long, default_value_t = 240.0)]
    view_width: f64,
    /// Viewport height in drawing units
    #[arg(long, default_value_t = 240.0)]
    view_height: f64,
    /// Viewport padding in drawing units
    #[arg(long, default_value_t = 40.0)]
    view_padding: f64,
}

impl ViewportArgs {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.view_width, self.view_height, self.view_padding)
    }
}

#[derive(Args)]
struct CatalogArgs {
    /// Override a catalog unit weight, e.g. --set-weight 8=0.395
    #[arg(long = "set-weight", value_name = "DIA=KG_PER_M")]
    set_weight: Vec<String>,
    /// Override a catalog price, e.g. --set-price 8=3.10
    #[arg(long = "set-price", value_name = "DIA=PRICE")]
    set_price: Vec<String>,
}

#[derive(Args)]
struct CostArgs {
    #[command(flatten)]
    shape: ShapeArgs,
    #[command(flatten)]
    pricing: PricingArgs,
}

#[derive(Args)]
struct PreviewArgs {
    #[command(flatten)]
    shape: ShapeArgs,
    #[command(flatten)]
    viewport: ViewportArgs,
    /// Output file; stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct QuoteArgs {
    #[command(flatten)]
    shape: ShapeArgs,
    #[command(flatten)]
    pricing: PricingArgs,
    #[command(flatten)]
    viewport: ViewportArgs,
    /// Client name printed on the document
    #[arg(long, default_value = "")]
    client_name: String,
    /// Client email printed on the document
    #[arg(long, default_value = "")]
    client_email: String,
    /// Document format
    #[arg(long, value_enum, default_value = "html")]
    format: OutputFormat,
    /// Directory the quotation file is written into
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();
    let config = Config::load_or_default(cli.config.as_deref())
        .context("Failed to load configuration")?;

    match cli.command {
        Command::Catalog(args) => print_catalog(&args),
        Command::Cost(args) => print_cost(&args, &config),
        Command::Preview(args) => write_preview(&args, &config),
        Command::Quote(args) => write_quote(&args, &config),
    }
}

fn print_catalog(args: &CatalogArgs) -> Result<()> {
    let catalog = build_catalog(&args.set_weight, &args.set_price)?;
    println!("{:<10} {:>14} {:>14}", "Diameter", "Weight (kg/m)", "Price (/kg)");
    for spec in catalog.specs() {
        println!(
            "Φ{:<9} {:>14.3} {:>14.2}",
            spec.diameter_mm, spec.weight_per_meter, spec.price_per_kg
        );
    }
    Ok(())
}

fn print_cost(args: &CostArgs, config: &Config) -> Result<()> {
    let defaults = &config.calculator;
    let shape = args.shape.resolve(defaults);
    let catalog = args.pricing.catalog()?;
    let diameter = args.pricing.diameter(defaults);
    let pricing = args.pricing.pricing(defaults);

    let result = compute_cost_with_catalog(&shape, &catalog, diameter, &pricing)?;
    info!(kind = %shape.kind(), diameter, "computed cost breakdown");

    let spec = catalog.get(diameter)?;
    println!("Shape: {} ({})", shape.kind().label(), describe_dimensions(&shape));
    println!("Bar: {}", spec);
    println!("Length per piece: {:.2} m", result.length_m);
    println!("Weight per piece: {:.4} kg", result.weight_kg);
    println!(
        "Total weight ({} pcs): {:.4} kg",
        pricing.effective_quantity(),
        result.total_weight_kg
    );
    println!();
    print_price_table(&result, pricing.margin_percent, &config.document.currency);
    Ok(())
}

fn print_price_table(result: &CalculationResult, margin_percent: f64, currency: &str) {
    println!(
        "{:<28} {:>16} {:>16}",
        "Description",
        format!("Per piece ({})", currency),
        format!("Total ({})", currency)
    );
    for row in price_rows(result, margin_percent) {
        println!(
            "{:<28} {:>16.2} {:>16.2}",
            row.label, row.unit_amount, row.total_amount
        );
    }
}

fn write_preview(args: &PreviewArgs, config: &Config) -> Result<()> {
    let shape = args.shape.resolve(&config.calculator);
    shape.validate()?;
    let viewport = args.viewport.viewport();
    let svg = render_svg(&layout_shape(&shape, &viewport), &viewport);

    match &args.out {
        Some(path) => {
            fs::write(path, &svg)
                .with_context(|| format!("Failed to write preview to {}", path.display()))?;
            info!(path = %path.display(), "wrote shape preview");
            println!("{}", path.display());
        }
        None => {
            std::io::stdout().write_all(svg.as_bytes())?;
        }
    }
    Ok(())
}

fn write_quote(args: &QuoteArgs, config: &Config) -> Result<()> {
    let defaults = &config.calculator;
    let shape = args.shape.resolve(defaults);
    let catalog = args.pricing.catalog()?;
    let diameter = args.pricing.diameter(defaults);
    let pricing = args.pricing.pricing(defaults);

    // The document reuses this result as-is; nothing is recomputed later.
    let result = compute_cost_with_catalog(&shape, &catalog, diameter, &pricing)?;

    let viewport = args.viewport.viewport();
    let layout = layout_shape(&shape, &viewport);

    let client = ClientIdentity::new(args.client_name.clone(), args.client_email.clone());
    let quotation = Quotation::assemble(
        config.issuer.clone(),
        client,
        shape,
        diameter,
        pricing,
        result,
        Local::now().date_naive(),
    )
    .with_currency(&config.document.currency)
    .with_validity_days(config.document.validity_days);

    let renderer: Box<dyn QuotationRenderer> = match args.format {
        OutputFormat::Text => Box::new(TextRenderer),
        OutputFormat::Html => Box::new(HtmlRenderer),
    };
    let bytes = renderer.render(&quotation, &layout, &viewport)?;

    let file_name = quotation.output_file_name(renderer.file_extension());
    let path = args.out_dir.join(file_name);
    fs::write(&path, bytes)
        .with_context(|| format!("Failed to write quotation to {}", path.display()))?;

    info!(path = %path.display(), number = %quotation.number, "wrote quotation");
    println!("{}", path.display());
    println!(
        "Total due: {}",
        format_money(quotation.result.total_gross_cost, &quotation.currency)
    );
    Ok(())
}

fn describe_dimensions(shape: &BendShape) -> String {
    let parts: Vec<String> = shape
        .dimensions()
        .into_iter()
        .map(|(field, value)| format!("{} {} cm", field.replace('_', " "), value))
        .collect();
    parts.join(", ")
}

/// Standard catalog with per-run copy-on-write overrides applied.
fn build_catalog(set_weight: &[String], set_price: &[String]) -> Result<RebarCatalog> {
    let mut catalog = RebarCatalog::standard();
    for entry in set_weight {
        let (diameter, value) = parse_override(entry)?;
        catalog = catalog.with_weight(diameter, value)?;
    }
    for entry in set_price {
        let (diameter, value) = parse_override(entry)?;
        catalog = catalog.with_price(diameter, value)?;
    }
    Ok(catalog)
}

fn parse_override(entry: &str) -> Result<(u32, f64)> {
    let Some((diameter, value)) = entry.split_once('=') else {
        bail!("Expected DIA=VALUE, got '{}'", entry);
    };
    let diameter: u32 = diameter
        .trim()
        .parse()
        .with_context(|| format!("Invalid diameter in '{}'", entry))?;
    let value: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("Invalid value in '{}'", entry))?;
    Ok((diameter, value))
}
