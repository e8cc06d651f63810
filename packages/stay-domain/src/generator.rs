//! Synthetic catalog generation.
//!
//! Every field is drawn independently and uniformly from its range or vocabulary. The only
//! cross-field dependency is `cover.url`, which always repeats `images[0]`.

use std::ops::RangeInclusive;

use rand::{Rng, seq::SliceRandom};
use uuid::Builder;

use crate::{
	listing::{
		AccommodationType, Cover, Demand, Facility, Insight, Listing, Location, Price, Rating, Room,
	},
	text,
};

pub const IMAGE_COUNT: RangeInclusive<usize> = 3..=30;
pub const INSIGHT_COUNT: RangeInclusive<usize> = 0..=25;
/// Distance to centre in tenths of a kilometre.
pub const CENTRE_TENTHS: RangeInclusive<u32> = 10..=100;
/// Average rating in tenths of a point.
pub const RATING_TENTHS: RangeInclusive<u32> = 10..=100;
pub const REVIEW_COUNT: RangeInclusive<u32> = 0..=10_000;
/// Price in steps of ten, so amounts span 100..=10_000.
pub const PRICE_STEPS: RangeInclusive<u32> = 10..=1_000;
pub const PRICE_STEP: u32 = 10;

const INSIGHT_TAG_WORDS: usize = 3;
const DESCRIPTION_PARAGRAPHS: usize = 3;

pub fn generate_catalog<R: Rng>(rng: &mut R, size: usize) -> Vec<Listing> {
	(0..size).map(|_| generate_listing(rng)).collect()
}

pub fn generate_listing<R: Rng>(rng: &mut R) -> Listing {
	let image_count = rng.gen_range(IMAGE_COUNT);
	let images = (0..image_count).map(|_| text::image_url(rng)).collect::<Vec<_>>();
	let cover = Cover { url: images[0].clone(), tag: text::word(rng) };
	let insight_count = rng.gen_range(INSIGHT_COUNT);
	let insights = (0..insight_count).map(|_| generate_insight(rng)).collect();

	Listing {
		id: generate_id(rng),
		title: text::product_name(rng),
		images,
		cover,
		location: Location { address: text::address(rng), centre: tenths(rng, CENTRE_TENTHS) },
		rating: Rating {
			average: tenths(rng, RATING_TENTHS),
			reviews: rng.gen_range(REVIEW_COUNT),
		},
		insights,
		demand: *text::pick(rng, &Demand::ALL),
		room: *text::pick(rng, &Room::ALL),
		price: Price {
			amount: rng.gen_range(PRICE_STEPS) * PRICE_STEP,
			currency: text::currency_symbol(rng),
			breakfast: rng.gen_bool(0.5),
		},
		kind: *text::pick(rng, &AccommodationType::ALL),
		description: text::paragraphs(rng, DESCRIPTION_PARAGRAPHS),
		facilities: generate_facilities(rng),
	}
}

fn generate_id<R: Rng>(rng: &mut R) -> String {
	let mut bytes = [0_u8; 16];

	rng.fill(&mut bytes[..]);

	Builder::from_random_bytes(bytes).into_uuid().to_string()
}

fn generate_insight<R: Rng>(rng: &mut R) -> Insight {
	let text = text::sentence(rng);
	let tag = if rng.gen_bool(0.5) { Some(text::words(rng, INSIGHT_TAG_WORDS)) } else { None };

	Insight { text, tag, highlights: rng.gen_bool(0.5) }
}

fn generate_facilities<R: Rng>(rng: &mut R) -> Vec<Facility> {
	let count = rng.gen_range(0..=Facility::ALL.len());

	Facility::ALL.choose_multiple(rng, count).copied().collect()
}

// Integer tenths keep the rendered value short, e.g. 2.5 rather than 2.4999999.
fn tenths<R: Rng>(rng: &mut R, range: RangeInclusive<u32>) -> f64 {
	f64::from(rng.gen_range(range)) / 10.0
}

#[cfg(test)]
mod tests {
	use rand::{SeedableRng, rngs::StdRng};

	use super::*;

	#[test]
	fn cover_repeats_first_image() {
		let mut rng = StdRng::seed_from_u64(3);

		for _ in 0..50 {
			let listing = generate_listing(&mut rng);

			assert_eq!(listing.cover.url, listing.images[0]);
		}
	}

	#[test]
	fn tenths_stay_on_grid() {
		let mut rng = StdRng::seed_from_u64(11);

		for _ in 0..200 {
			let value = tenths(&mut rng, CENTRE_TENTHS);
			let scaled = value * 10.0;

			assert!((scaled - scaled.round()).abs() < 1e-9, "{value} is not a multiple of 0.1");
		}
	}
}
