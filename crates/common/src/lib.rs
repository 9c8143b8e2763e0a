pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_params_defaults_ok() {
        let p = types::RawPageParams::default();
        assert_eq!(p.limit, 0);
        assert_eq!(p.page, 0);
        assert_eq!(p.sort, "created_at");
        assert_eq!(p.direction, "");
    }
}
