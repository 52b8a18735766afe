use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use chart_branding::{palettes, tint, continuous_scale, fill_scale,
                     Aesthetic, ColorRange, ContinuousType, ScaleOptions,
                     DEFAULT_SEQUENCE};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[String],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {c}\" title=\"{c}\"></td>")?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td>\
                  </tr></table><br/>")?;
    Ok(())
}

fn gradient(fh: &mut impl Write, range: &impl ColorRange, n: usize,
            comment: &str) -> Result<(), Err> {
    let colors: Vec<_> = range.range(0., 1., n)
        .map(|(_, c)| tint::hex(c)).collect();
    table_of_colors(fh, &colors, 1, comment)
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Brand colors: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Palette</h3>")?;
    for e in palettes::entries() {
        let tints = tint::tint_steps(e, &[1., 0.8, 0.6, 0.4, 0.2])?;
        let c = format!("{} ({:?}): {}", e.name, e.category, e.usage);
        table_of_colors(&mut fh, &tints, 40, &c)?;
    }

    writeln!(fh, "<h3>Discrete scale</h3>")?;
    let s = fill_scale(&DEFAULT_SEQUENCE, ScaleOptions::default())?;
    table_of_colors(&mut fh, s.values(), 40, "default sequence")?;

    writeln!(fh, "<h3>Continuous scales</h3>")?;
    for (typ, first, second) in [(ContinuousType::Sequential, "red", None),
                                 (ContinuousType::Sequential, "teal", None),
                                 (ContinuousType::Diverging, "red", None),
                                 (ContinuousType::Diverging, "purple",
                                  Some("green"))] {
        let s = continuous_scale(Aesthetic::Fill, typ, first, second,
                                 ScaleOptions::default())?;
        let c = format!("{typ} {first} {}", second.unwrap_or(""));
        table_of_colors(&mut fh, s.colours(), 40, &c)?;
        gradient(&mut fh, &s, 256, &format!("{c} (interpolated)"))?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
