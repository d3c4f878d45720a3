//! Domain-critical regression tests for dominant-color.
//!
//! These tests guard the extraction contract itself rather than individual
//! helpers. Each test documents the regression it would catch.

use std::collections::HashSet;

use pretty_assertions::assert_eq;

use crate::{dominant_color, Extractor, PixelFilter, Rgb, Rgba};

// ========================================================================
// Provenance: the winner is always a voted bucket
// ========================================================================

/// If this breaks, it means: the extractor is synthesizing colors (for
/// example averaging buckets) instead of reporting one that actually
/// received votes.
#[test]
fn test_result_is_a_voted_bucket() {
    let pixels: Vec<Rgba> = (0..400u32)
        .map(|i| {
            Rgba::opaque(
                (i * 7 % 256) as u8,
                (i * 13 % 256) as u8,
                (i * 29 % 256) as u8,
            )
        })
        .collect();

    let winner = Extractor::new()
        .extract(pixels.iter().copied())
        .expect("varied input should produce a winner");

    let filter = PixelFilter::new();
    let admitted: HashSet<Rgb> = pixels
        .iter()
        .map(|px| px.quantized())
        .filter(|q| filter.admits(*q))
        .map(|q| q.color())
        .collect();

    assert!(
        admitted.contains(&winner),
        "REGRESSION: winner {winner:?} is not one of the {} admitted buckets",
        admitted.len()
    );
}

/// If this breaks, it means: the result is being blended from multiple
/// buckets. With a 51/49 split the answer must be the majority color
/// exactly, never a mix of the two.
#[test]
fn test_never_averages_buckets() {
    let mut pixels = vec![Rgba::opaque(248, 8, 8); 51];
    pixels.extend(vec![Rgba::opaque(8, 8, 248); 49]);

    assert_eq!(dominant_color(&pixels), Some(Rgb::new(248, 8, 8)));
}

// ========================================================================
// Majority and tie behavior
// ========================================================================

/// If this breaks, it means: votes are being weighted or dropped; a clear
/// majority must win no matter how the samples are interleaved.
#[test]
fn test_majority_wins_in_any_order() {
    let red = Rgba::opaque(200, 0, 0);
    let green = Rgba::opaque(0, 200, 0);

    // Blocked: 100 red then 10 green.
    let mut blocked = vec![red; 100];
    blocked.extend(vec![green; 10]);

    // Interleaved: a green after every tenth red.
    let mut interleaved = Vec::new();
    for i in 0..100 {
        interleaved.push(red);
        if i % 10 == 9 {
            interleaved.push(green);
        }
    }

    let expected = Some(Rgb::new(200, 0, 0));
    assert_eq!(dominant_color(&blocked), expected);
    assert_eq!(dominant_color(&interleaved), expected);
}

/// If this breaks, it means: the leader is being recomputed after the scan
/// (map iteration order would decide ties at random) or the strict
/// comparison became greater-or-equal. Ties must go to the bucket that
/// reached the winning count first, every time.
#[test]
fn test_tie_goes_to_the_earlier_bucket() {
    let mut pixels = vec![Rgba::opaque(80, 80, 80); 5];
    pixels.extend(vec![Rgba::opaque(160, 160, 160); 5]);
    let reversed: Vec<Rgba> = pixels.iter().rev().copied().collect();

    let extractor = Extractor::new();
    for _ in 0..20 {
        assert_eq!(
            extractor.extract(pixels.iter().copied()),
            Some(Rgb::new(80, 80, 80)),
            "REGRESSION: a tied bucket displaced the incumbent"
        );
        assert_eq!(
            extractor.extract(reversed.iter().copied()),
            Some(Rgb::new(160, 160, 160)),
            "REGRESSION: tie result no longer follows sample order"
        );
    }
}

// ========================================================================
// Empty outcomes are normal
// ========================================================================

/// If this breaks, it means: an input with nothing to vote stopped being
/// reported as `None` (or worse, started erroring). Empty is a normal
/// outcome of the contract, produced by empty input, transparent images,
/// and images that are entirely near-black or near-white.
#[test]
fn test_fully_filtered_inputs_yield_none() {
    let extractor = Extractor::new();

    assert_eq!(extractor.extract(std::iter::empty()), None);

    let transparent = vec![Rgba::new(200, 100, 50, 0); 64];
    assert_eq!(extractor.extract(transparent), None);

    let near_black = vec![Rgba::opaque(30, 12, 40); 64];
    assert_eq!(extractor.extract(near_black), None);

    let near_white = vec![Rgba::opaque(255, 230, 220); 64];
    assert_eq!(extractor.extract(near_white), None);
}

// ========================================================================
// Quantization semantics
// ========================================================================

/// If this breaks, it means: channel snapping drifted off the half-up
/// rule. A remainder of exactly 4 must round to the bucket above
/// (132 -> 136 and 4 -> 8), and 251 must round down to 248.
#[test]
fn test_half_up_rounding_at_bucket_boundaries() {
    let pixels = [Rgba::opaque(132, 4, 251)];
    assert_eq!(dominant_color(&pixels), Some(Rgb::new(136, 8, 248)));
}

/// If this breaks, it means: the top-of-range clamp regressed. Raw inputs
/// 252..=255 would snap to 256, which no channel can hold; they belong in
/// the 248 bucket together with everything from 245 up.
#[test]
fn test_top_of_range_clamps_to_last_bucket() {
    let pixels = [Rgba::opaque(255, 10, 10)];
    assert_eq!(dominant_color(&pixels), Some(Rgb::new(248, 8, 8)));

    let clamped: Vec<Rgba> = (252..=255u8).map(|v| Rgba::opaque(v, 16, 16)).collect();
    assert_eq!(dominant_color(&clamped), Some(Rgb::new(248, 16, 16)));
}

/// If this breaks, it means: alpha stopped being quantized before the
/// transparency comparison. Raw alpha 43 snaps to 40 (discarded) while 44
/// snaps to 48 (kept); comparing raw values instead would flip 41..=43.
#[test]
fn test_alpha_is_quantized_before_the_cutoff() {
    let faint = vec![Rgba::new(200, 16, 16, 43); 8];
    assert_eq!(dominant_color(&faint), None);

    let barely = vec![Rgba::new(200, 16, 16, 44); 8];
    assert_eq!(dominant_color(&barely), Some(Rgb::new(200, 16, 16)));
}

// ========================================================================
// Entry point agreement
// ========================================================================

/// If this breaks, it means: the byte entry points disagree with the
/// sample entry point over the same pixels in the same order.
#[test]
fn test_byte_and_sample_entry_points_agree() {
    let pixels: Vec<Rgba> = (0..256u32)
        .map(|i| Rgba::opaque((i % 256) as u8, 128, (255 - i % 256) as u8))
        .collect();
    let bytes: Vec<u8> = pixels
        .iter()
        .flat_map(|px| [px.r, px.g, px.b, px.a])
        .collect();

    let extractor = Extractor::new();
    let from_samples = extractor.extract(pixels.iter().copied());
    let from_bytes = extractor.extract_bytes(&bytes).expect("whole pixels");
    let from_frame = extractor.extract_frame(&bytes, 16, 16).expect("16x16 frame");

    assert_eq!(from_samples, from_bytes);
    assert_eq!(from_samples, from_frame);
}
