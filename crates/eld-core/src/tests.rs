//! Unit tests for eld-core primitives.

#[cfg(test)]
mod ids {
    use crate::TripId;

    #[test]
    fn display_is_bare_number() {
        assert_eq!(TripId(7).to_string(), "7");
    }

    #[test]
    fn parse_and_next() {
        let id: TripId = " 41 ".parse().unwrap();
        assert_eq!(id, TripId(41));
        assert_eq!(id.next(), TripId(42));
        assert!("abc".parse::<TripId>().is_err());
    }

    #[test]
    fn ordering() {
        assert!(TripId(0) < TripId(1));
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(41.8781, -87.6298);
        assert!(p.distance_miles(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude() {
        // ~1 degree of latitude ≈ 69.09 miles
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_miles(b);
        assert!((d - 69.09).abs() < 0.1, "got {d}");
    }

    #[test]
    fn chicago_to_dallas() {
        // Great-circle distance ≈ 805 miles.
        let chicago = GeoPoint::new(41.8781, -87.6298);
        let dallas = GeoPoint::new(32.7767, -96.7970);
        let d = chicago.distance_miles(dallas);
        assert!((d - 805.0).abs() < 5.0, "got {d}");
    }

    #[test]
    fn symmetric() {
        let a = GeoPoint::new(34.0522, -118.2437);
        let b = GeoPoint::new(40.7128, -74.0060);
        assert!((a.distance_miles(b) - b.distance_miles(a)).abs() < 1e-9);
    }

    #[test]
    fn parse_pair() {
        let p: GeoPoint = "41.5, -87.25".parse().unwrap();
        assert_eq!(p, GeoPoint::new(41.5, -87.25));
        assert_eq!(p.to_pair(), [41.5, -87.25]);
    }

    #[test]
    fn parse_rejects_garbage_and_range() {
        assert!("Chicago, IL".parse::<GeoPoint>().is_err());
        assert!("91.0, 0.0".parse::<GeoPoint>().is_err());
        assert!("0.0, 181.0".parse::<GeoPoint>().is_err());
        assert!("12.0".parse::<GeoPoint>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(GeoPoint::new(1.0, -2.5).to_string(), "(1.000000, -2.500000)");
    }
}

#[cfg(test)]
mod hours {
    use crate::hours::*;

    #[test]
    fn first_day_overhead_covers_both_load_slots() {
        assert_eq!(FIRST_DAY_OVERHEAD_HOURS, 2.0 * LOAD_HANDLING_HOURS);
    }

    #[test]
    fn drive_limit_fits_in_a_day() {
        assert!(MAX_DRIVE_HOURS_PER_DAY + FIRST_DAY_OVERHEAD_HOURS < HOURS_PER_DAY);
    }
}
