use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const PRODUCTS: [&str; 4] = ["Headphones", "Kettle", "Backpack", "Desk Lamp"];

const POSITIVE_PHRASES: &[&str] = &[
    "Great product, works exactly as described",
    "Absolutely love it, would recommend to anyone",
    "Excellent quality for the price",
    "Very comfortable and sturdy",
    "Fast delivery and a perfect fit",
];

const NEGATIVE_PHRASES: &[&str] = &[
    "Terrible, broke after two days",
    "Not worth the money at all",
    "Cheap and flimsy, returned it",
    "Worst purchase this year",
    "Disappointing quality, very noisy",
];

const NEUTRAL_PHRASES: &[&str] = &[
    "Arrived on Tuesday in a brown box",
    "It is a backpack with two pockets",
    "Bought this as a gift for my brother",
    "Color is dark blue",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }
}

struct Review {
    text: Option<String>,
    product: Option<&'static str>,
    rating: i64,
}

fn generate_reviews(rng: &mut SimpleRng, n: usize) -> Vec<Review> {
    (0..n)
        .map(|_| {
            let roll = rng.next_f64();
            let (text, rating) = if roll < 0.05 {
                // A few blank reviews, which classify as Neutral.
                (None, 3)
            } else if roll < 0.50 {
                (Some(rng.pick(POSITIVE_PHRASES)), 4 + (rng.next_u64() % 2) as i64)
            } else if roll < 0.80 {
                (Some(rng.pick(NEGATIVE_PHRASES)), 1 + (rng.next_u64() % 2) as i64)
            } else {
                (Some(rng.pick(NEUTRAL_PHRASES)), 3)
            };
            let product = if rng.next_f64() < 0.03 {
                None
            } else {
                Some(rng.pick(&PRODUCTS))
            };
            Review {
                text: text.map(str::to_string),
                product,
                rating,
            }
        })
        .collect()
}

fn write_csv(path: &str, reviews: &[Review]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    // Padded header names exercise the loader's trimming.
    writer.write_record([" REVIEW ", "PRODUCT", "RATING"])?;
    for r in reviews {
        writer.write_record([
            r.text.as_deref().unwrap_or(""),
            r.product.unwrap_or(""),
            r.rating.to_string().as_str(),
        ])?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_parquet(path: &str, reviews: &[Review]) -> Result<()> {
    let text_array: StringArray = reviews.iter().map(|r| r.text.as_deref()).collect();
    let product_array: StringArray = reviews.iter().map(|r| r.product).collect();
    let rating_array = Int64Array::from(reviews.iter().map(|r| r.rating).collect::<Vec<_>>());

    let schema = Arc::new(Schema::new(vec![
        Field::new("REVIEW", DataType::Utf8, true),
        Field::new("PRODUCT", DataType::Utf8, true),
        Field::new("RATING", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(text_array),
            Arc::new(product_array),
            Arc::new(rating_array),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating writer")?;
    writer.write(&batch).context("writing batch")?;
    writer.close().context("closing writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let reviews = generate_reviews(&mut rng, 500);

    write_csv("sample_reviews.csv", &reviews)?;
    write_parquet("sample_reviews.parquet", &reviews)?;

    println!(
        "Wrote {} reviews across {} products to sample_reviews.csv and sample_reviews.parquet",
        reviews.len(),
        PRODUCTS.len()
    );
    Ok(())
}
