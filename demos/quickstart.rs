use caldat::{decompose_batch, decompose_with, JulianDate, ModifiedJulianDate, OutputFormat, Shape};
use chrono::Utc;

fn main() -> Result<(), caldat::CalendarError> {
    let now = JulianDate::from_utc(Utc::now());
    println!("{now} -> {}", now.to_calendar()?);
    println!("{} -> {}", JulianDate::J2000, JulianDate::J2000.to_calendar()?);

    let mjd = ModifiedJulianDate::new(0.0);
    println!("{mjd} -> {}", mjd.to_calendar()?);

    // The ten-day skip of October 1582.
    let columns = decompose_batch(&[2_299_159.5, 2_299_160.5])?;
    for date in columns.iter() {
        println!("{date}");
    }

    let (year, month, day, ..) = columns.shape(OutputFormat::Tuple).into_tuple().unwrap_or_default();
    println!("years {year:?}, months {month:?}, days {day:?}");

    for row in decompose_with(&[1_721_057.5, 1_721_423.5], "paired-sequence")?
        .into_paired()
        .into_iter()
        .flatten()
    {
        println!("{row:?}");
    }
    Ok(())
}
