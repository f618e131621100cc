/// Currency amount the way the site shows it: `R$ 1250.75`.
pub fn format_brl(amount: f64) -> String {
    format!("R$ {:.2}", amount)
}

pub fn format_odd(odd: f64) -> String {
    format!("{:.2}", odd)
}

#[cfg(not(any(test, feature = "web", feature = "chrono")))]
compile_error!("enable one of the platform features: web, desktop, mobile or server");

#[cfg(feature = "web")]
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(all(not(feature = "web"), any(test, feature = "chrono")))]
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brl_always_has_two_decimals() {
        assert_eq!(format_brl(1250.75), "R$ 1250.75");
        assert_eq!(format_brl(10.0), "R$ 10.00");
        assert_eq!(format_brl(5.5), "R$ 5.50");
    }

    #[test]
    fn odds_are_rounded() {
        assert_eq!(format_odd(2.1), "2.10");
        assert_eq!(format_odd(3.333), "3.33");
    }

    #[test]
    fn year_is_plausible() {
        assert!(current_year() >= 2024);
    }
}
