//! Display sampling over the lawyer directory

use super::entities::LawyerRecord;
use rand::Rng;

/// Maximum number of records shown in the overlay at once.
pub const DISPLAY_SAMPLE_SIZE: usize = 10;

/// Select a bounded random subset of the directory for display.
///
/// Records without finite coordinates are excluded up front, so the map
/// overlay is never handed a marker it cannot place. The remaining pool is
/// shuffled in place with Fisher–Yates and the first `min(k, N)` records
/// returned. Callers re-sample on every overlay open; results are never
/// cached, so repeated opens yield independent subsets.
pub fn display_sample<R: Rng + ?Sized>(
    records: &[LawyerRecord],
    k: usize,
    rng: &mut R,
) -> Vec<LawyerRecord> {
    let mut pool: Vec<LawyerRecord> = records
        .iter()
        .filter(|r| r.has_coordinates())
        .cloned()
        .collect();

    for i in (1..pool.len()).rev() {
        let j = rng.random_range(0..=i);
        pool.swap(i, j);
    }

    pool.truncate(k);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn record(id: &str, lat: f64, lng: f64) -> LawyerRecord {
        LawyerRecord {
            id: id.to_string(),
            name: format!("Lawyer {id}"),
            latitude: lat,
            longitude: lng,
            ..Default::default()
        }
    }

    fn directory(n: usize) -> Vec<LawyerRecord> {
        (0..n)
            .map(|i| record(&i.to_string(), 34.0 + i as f64 * 0.01, -118.0))
            .collect()
    }

    #[test]
    fn test_sample_is_capped_at_k() {
        let records = directory(50);
        let mut rng = StdRng::seed_from_u64(7);
        let sample = display_sample(&records, DISPLAY_SAMPLE_SIZE, &mut rng);
        assert_eq!(sample.len(), DISPLAY_SAMPLE_SIZE);
    }

    #[test]
    fn test_small_directory_is_returned_whole() {
        let records = directory(4);
        let mut rng = StdRng::seed_from_u64(7);
        let sample = display_sample(&records, DISPLAY_SAMPLE_SIZE, &mut rng);
        assert_eq!(sample.len(), 4);
    }

    #[test]
    fn test_sample_has_no_duplicates_and_is_a_subset() {
        let records = directory(30);
        let all_ids: HashSet<String> = records.iter().map(|r| r.id.clone()).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let sample = display_sample(&records, DISPLAY_SAMPLE_SIZE, &mut rng);
        let sampled_ids: HashSet<String> = sample.iter().map(|r| r.id.clone()).collect();

        assert_eq!(sampled_ids.len(), sample.len(), "duplicates in sample");
        assert!(sampled_ids.is_subset(&all_ids));
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(display_sample(&[], DISPLAY_SAMPLE_SIZE, &mut rng).is_empty());
    }

    #[test]
    fn test_records_without_coordinates_are_never_sampled() {
        let mut records = directory(5);
        records.push(record("nan-lat", f64::NAN, -118.0));
        records.push(record("nan-lng", 34.0, f64::NAN));

        // Every record in every sample must be mappable, whatever the seed.
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sample = display_sample(&records, DISPLAY_SAMPLE_SIZE, &mut rng);
            assert_eq!(sample.len(), 5);
            assert!(sample.iter().all(|r| r.has_coordinates()));
        }
    }

    #[test]
    fn test_seeded_sampling_is_deterministic() {
        let records = directory(25);
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);

        let first: Vec<String> = display_sample(&records, 10, &mut a)
            .into_iter()
            .map(|r| r.id)
            .collect();
        let second: Vec<String> = display_sample(&records, 10, &mut b)
            .into_iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(first, second);
    }
}
