/// Describe a Fahrenheit temperature in familiar terms.
///
/// Thresholds are exclusive and checked from hottest to coldest.
pub fn temperature_perception(t: i32) -> &'static str {
    match t {
        t if t > 110 => "Dangerously hot",
        t if t > 90 => "Really hot",
        t if t > 80 => "Hot",
        t if t > 70 => "Comfortably warm",
        t if t > 60 => "Warm",
        t if t > 50 => "Cool",
        t if t > 40 => "Chilly",
        t if t > 30 => "Cold",
        t if t > 10 => "Really cold",
        t if t > 0 => "Bone-chilling cold",
        _ => "Dangerously cold",
    }
}
