//! Weather widget on the terminal

use std::io::Write;

use application::{WeatherDisplay, WeatherService};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// Render the display fields as a text block
pub fn render(display: &WeatherDisplay) -> String {
    format!(
        "🌡️  {}\n\
         📍 {}\n\
         🕐 {}\n\
         🌤️  {} ({})\n\
         💧 Humidity: {}\n\
         💨 Wind: {}\n\
         👁️  Visibility: {}\n\
         🌅 Sunrise: {}\n\
         🌇 Sunset: {}\n\
         🔆 UV index: {}\n\
         🫁 Air quality: {}\n",
        display.temperature,
        display.location,
        display.local_time,
        display.condition,
        display.icon_url,
        display.humidity,
        display.wind_speed,
        display.visibility,
        display.sunrise,
        display.sunset,
        display.uv_index,
        display.air_quality,
    )
}

/// Look up one city and print the result or an `Error: ...` line
///
/// Returns whether the lookup succeeded.
///
/// # Errors
///
/// Returns an error only if writing the output fails.
pub async fn show<W: Write>(
    service: &WeatherService,
    city: &str,
    out: &mut W,
) -> std::io::Result<bool> {
    match service.lookup(city).await {
        Ok(display) => {
            write!(out, "{}", render(&display))?;
            Ok(true)
        },
        Err(e) => {
            writeln!(out, "Error: {e}")?;
            Ok(false)
        },
    }
}

/// Look up every line of `input` as a city until the input ends
///
/// Blank lines are skipped without a request.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub async fn interactive<R, W>(
    service: &WeatherService,
    input: R,
    out: &mut W,
) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "\nCity: ")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            return Ok(());
        };
        let city = line.trim();
        if city.is_empty() {
            debug!("Skipping blank city");
            continue;
        }
        writeln!(out)?;
        show(service, city, out).await?;
    }
}
