//! Built-in vocabularies for synthetic listing text.

use rand::Rng;

const PRODUCT_ADJECTIVES: &[&str] = &[
	"Small", "Ergonomic", "Rustic", "Intelligent", "Gorgeous", "Incredible", "Fantastic",
	"Practical", "Sleek", "Awesome", "Generic", "Handcrafted", "Handmade", "Licensed", "Refined",
	"Unbranded", "Tasty", "Grand", "Cozy", "Quiet",
];
const PRODUCT_MATERIALS: &[&str] = &[
	"Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Metal", "Soft",
	"Fresh", "Frozen", "Marble", "Brick",
];
const PRODUCT_NAMES: &[&str] = &[
	"Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants", "Shirt",
	"Table", "Shoes", "Hat", "Towels", "Soap", "Tuna", "Chicken", "Fish", "Cheese", "Bacon",
	"Pizza", "Salad", "Sausages", "Chips", "Hotel", "Inn", "Lodge", "Villa",
];
const STREET_NAMES: &[&str] = &[
	"Długa", "Krótka", "Kwiatowa", "Leśna", "Lipowa", "Łąkowa", "Ogrodowa", "Polna", "Słoneczna",
	"Szkolna", "Kościelna", "Mickiewicza", "Sienkiewicza", "Kopernika", "Piłsudskiego",
	"Wiejska", "Zielona", "Parkowa", "Brzozowa", "Rynek",
];
const COUNTRIES: &[&str] = &[
	"Polska", "Niemcy", "Czechy", "Słowacja", "Litwa", "Francja", "Hiszpania", "Włochy",
	"Portugalia", "Chorwacja", "Grecja", "Austria", "Węgry", "Norwegia", "Szwecja",
];
const CURRENCY_SYMBOLS: &[&str] = &["zł", "€", "$", "£", "¥", "Kč", "kr", "Ft", "₣", "₴"];
const LOREM_WORDS: &[&str] = &[
	"lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipisci", "velit", "sed", "quia",
	"non", "numquam", "eius", "modi", "tempora", "incidunt", "ut", "labore", "et", "dolore",
	"magnam", "aliquam", "quaerat", "voluptatem", "enim", "ad", "minima", "veniam", "quis",
	"nostrum", "exercitationem", "ullam", "corporis", "suscipit", "laboriosam", "nisi",
	"aliquid", "ex", "ea", "commodi", "consequatur", "autem", "vel", "eum", "iure",
	"reprehenderit", "qui", "in", "voluptate", "esse", "quam", "nihil", "molestiae",
];
const IMAGE_BASE_URL: &str = "https://loremflickr.com/640/480/city";

pub fn pick<'a, R, T>(rng: &mut R, values: &'a [T]) -> &'a T
where
	R: Rng,
{
	&values[rng.gen_range(0..values.len())]
}

pub fn product_name<R: Rng>(rng: &mut R) -> String {
	format!(
		"{} {} {}",
		pick(rng, PRODUCT_ADJECTIVES),
		pick(rng, PRODUCT_MATERIALS),
		pick(rng, PRODUCT_NAMES)
	)
}

pub fn image_url<R: Rng>(rng: &mut R) -> String {
	format!("{IMAGE_BASE_URL}?lock={}", rng.gen_range(1..=100_000_u32))
}

/// `ul. <street> <number>, <NN-NNN>, <country>`
pub fn address<R: Rng>(rng: &mut R) -> String {
	let street = pick(rng, STREET_NAMES);
	let number = rng.gen_range(1..=250_u32);
	let zip = format!("{:02}-{:03}", rng.gen_range(0..100_u32), rng.gen_range(0..1_000_u32));
	let country = pick(rng, COUNTRIES);

	format!("ul. {street} {number}, {zip}, {country}")
}

pub fn currency_symbol<R: Rng>(rng: &mut R) -> String {
	pick(rng, CURRENCY_SYMBOLS).to_string()
}

pub fn word<R: Rng>(rng: &mut R) -> String {
	pick(rng, LOREM_WORDS).to_string()
}

pub fn words<R: Rng>(rng: &mut R, count: usize) -> String {
	(0..count).map(|_| *pick(rng, LOREM_WORDS)).collect::<Vec<_>>().join(" ")
}

pub fn sentence<R: Rng>(rng: &mut R) -> String {
	let count = rng.gen_range(3..=10);
	let body = words(rng, count);
	let mut chars = body.chars();

	match chars.next() {
		Some(first) => format!("{}{}.", first.to_uppercase(), chars.as_str()),
		None => String::new(),
	}
}

pub fn paragraph<R: Rng>(rng: &mut R) -> String {
	let count = rng.gen_range(3..=6);

	(0..count).map(|_| sentence(rng)).collect::<Vec<_>>().join(" ")
}

pub fn paragraphs<R: Rng>(rng: &mut R, count: usize) -> String {
	(0..count).map(|_| paragraph(rng)).collect::<Vec<_>>().join("\n\n")
}
