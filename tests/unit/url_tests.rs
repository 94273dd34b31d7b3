// URL builder tests
// End-to-end rendering of signed and unsigned URLs through the public API

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use imgproxy_url::*;

const TEST_KEY: &str = "e99bd6542067de7dac460558ecada3987dd2d18b066180eaa1c3abc66fb22e463d177ac8f64c93c44d0d78c35adcdda7e0b5f5a116b23ac3d1fa7a305d0727c4";
const TEST_SALT: &str = "a997d51b78d28ba8c05f39b6e634a044b9551352b105f70a4c0fc4c0eca5982719a33527d0253810273bf4d8b747a261cd4898d3e46916cc57d1de8aac132870";

fn signed_base() -> ImageUrl {
    ImageUrl::default()
        .with_options([
            UrlOption::Key(TEST_KEY.to_string()),
            UrlOption::Salt(TEST_SALT.to_string()),
        ])
        .unwrap()
}

#[test]
fn test_unsigned_width_and_height() {
    let url = ImageUrl::new(
        "local:///img.jpg",
        [ProcessingOption::Width(200), ProcessingOption::Height(200)],
    )
    .unwrap();

    assert_eq!(
        url.to_url().unwrap(),
        "/insecure/h:200/w:200/bG9jYWw6Ly8vaW1nLmpwZw"
    );
}

#[test]
fn test_signed_full_length_with_endpoint() {
    let url = ImageUrl::new(
        "local:///o/t/otRO1jl3IUVa.jpg",
        [
            UrlOption::from(ProcessingOption::Width(200)),
            ProcessingOption::Height(200).into(),
            UrlOption::Format("png".to_string()),
            UrlOption::PlainSource(false),
            ProcessingOption::ResizingType(ResizingType::Fill).into(),
            UrlOption::Key(TEST_KEY.to_string()),
            UrlOption::Salt(TEST_SALT.to_string()),
            UrlOption::Endpoint("https://example.com/".to_string()),
        ],
    )
    .unwrap();

    assert_eq!(
        url.to_url().unwrap(),
        "https://example.com/Yysx5pZ_gcWJbVQEHSp37U6r3swrZgFAygnHmbFK2VE/h:200/rt:fill/w:200/bG9jYWw6Ly8vby90L290Uk8xamwzSVVWYS5qcGc.png"
    );
}

#[test]
fn test_plain_source_with_format() {
    let url = ImageUrl::new(
        "https://ex.com/a b.png",
        [
            UrlOption::from(ProcessingOption::Quality(80)),
            UrlOption::PlainSource(true),
            UrlOption::Format("jpg".to_string()),
        ],
    )
    .unwrap();

    assert_eq!(
        url.to_url().unwrap(),
        "/insecure/q:80/plain/https%3A%2F%2Fex.com%2Fa+b.png@jpg"
    );
}

#[test]
fn test_crop_with_focus_point_segment() {
    let url = ImageUrl::new(
        "local:///img.jpg",
        [ProcessingOption::crop_with_gravity(
            0.5,
            0.5,
            Gravity::focus_point(0.25, 0.75),
        )],
    )
    .unwrap();

    assert_eq!(
        url.path().unwrap(),
        "/c:0.5:0.5:fp:0.250:0.750/bG9jYWw6Ly8vaW1nLmpwZw"
    );
}

#[test]
fn test_trim_with_equal_horizontal_only() {
    let url = ImageUrl::new("local:///img.jpg", [Trim::new(10).equal_horizontal()]).unwrap();
    assert!(url.path().unwrap().starts_with("/t:10::1:/"));
}

#[test]
fn test_truncated_signature_is_prefix_of_full_mac() {
    let options = [
        UrlOption::Source("local:///o/t/otRO1jl3IUVa.jpg".to_string()),
        ProcessingOption::Width(200).into(),
        ProcessingOption::Height(200).into(),
        ProcessingOption::ResizingType(ResizingType::Fill).into(),
        UrlOption::Format("png".to_string()),
    ];
    let full = signed_base().with_options(options.clone()).unwrap();
    let truncated = full.with_options([UrlOption::SignatureSize(8)]).unwrap();

    let full_url = full.to_url().unwrap();
    let short_url = truncated.to_url().unwrap();
    let full_sig = signature_of(&full_url);
    let short_sig = signature_of(&short_url);

    let full_bytes = URL_SAFE_NO_PAD.decode(full_sig).unwrap();
    let short_bytes = URL_SAFE_NO_PAD.decode(short_sig).unwrap();
    assert_eq!(full_bytes.len(), 32);
    assert_eq!(short_bytes.len(), 8);
    assert_eq!(&full_bytes[..8], short_bytes.as_slice());
    assert_eq!(short_sig, "Yysx5pZ_gcU");
}

#[test]
fn test_signature_size_zero_means_full() {
    let url = signed_base()
        .with_options([
            UrlOption::Source("a".to_string()),
            UrlOption::SignatureSize(0),
        ])
        .unwrap();
    let rendered = url.to_url().unwrap();
    let sig = signature_of(&rendered);
    assert_eq!(URL_SAFE_NO_PAD.decode(sig).unwrap().len(), 32);
}

#[test]
fn test_raw_key_matches_hex_key() {
    let hex_url = signed_base()
        .with_options([UrlOption::Source("a".to_string())])
        .unwrap();
    let raw_url = ImageUrl::default()
        .with_options([
            UrlOption::KeyRaw(hex::decode(TEST_KEY).unwrap()),
            UrlOption::SaltRaw(hex::decode(TEST_SALT).unwrap()),
            UrlOption::Source("a".to_string()),
        ])
        .unwrap();
    assert_eq!(hex_url.to_url().unwrap(), raw_url.to_url().unwrap());
}

#[test]
fn test_with_options_leaves_receiver_untouched() {
    let base = ImageUrl::new("local:///img.jpg", [ProcessingOption::Width(100)]).unwrap();
    let before = base.to_url().unwrap();

    let derived = base
        .with_options([
            UrlOption::from(ProcessingOption::Width(300)),
            ProcessingOption::Blur(2).into(),
            UrlOption::Endpoint("https://cdn.example.com".to_string()),
        ])
        .unwrap();

    assert_eq!(base.to_url().unwrap(), before);
    assert_eq!(
        derived.to_url().unwrap(),
        "https://cdn.example.com/insecure/bl:2/w:300/bG9jYWw6Ly8vaW1nLmpwZw"
    );
}

#[test]
fn test_source_option_in_with_options() {
    let base = ImageUrl::new("local:///a.jpg", [ProcessingOption::Width(10)]).unwrap();
    let other = base
        .with_options([UrlOption::Source("local:///b.jpg".to_string())])
        .unwrap();
    assert_eq!(other.source(), "local:///b.jpg");
    assert_eq!(base.source(), "local:///a.jpg");
}

#[test]
fn test_decode_error_is_immediate() {
    let result = ImageUrl::new("a", [UrlOption::Salt("zz".to_string())]);
    assert!(matches!(result, Err(UrlError::Decode { field: "salt", .. })));
}

#[test]
fn test_constraint_error_deferred_to_finalization() {
    let url = ImageUrl::new(
        "a",
        [
            UrlOption::from(ProcessingOption::extend_with_gravity(true, Gravity::smart())),
            ProcessingOption::Width(10).into(),
        ],
    )
    .expect("constraint violations must not interrupt option application");

    assert!(!url.is_valid());
    assert!(matches!(url.to_url(), Err(UrlError::Constraint { .. })));
    assert!(url.path().is_err());
}

#[test]
fn test_full_catalog_renders() {
    let url = ImageUrl::new(
        "local:///img.jpg",
        [
            UrlOption::from(ProcessingOption::Width(300)),
            ProcessingOption::Height(0).into(),
            ProcessingOption::ResizingType(ResizingType::Auto).into(),
            ProcessingOption::ResizingAlgorithm(ResizingAlgorithm::Lanczos2).into(),
            ProcessingOption::Dpr(2).into(),
            ProcessingOption::Enlarge(true).into(),
            ProcessingOption::extend_with_gravity(true, GravityType::Center).into(),
            ProcessingOption::crop(0.0, 120.0).into(),
            Padding::new(1, 2, 3, 4).into(),
            Gravity::with_offsets(GravityType::North, 0, 12).into(),
            ProcessingOption::Sharpen(1.5).into(),
            ProcessingOption::Blur(3).into(),
            ProcessingOption::Quality(90).into(),
            ProcessingOption::MaxBytes(4096).into(),
            ProcessingOption::background_rgb(1, 2, 3).into(),
            ProcessingOption::BackgroundAlpha(0.25).into(),
            ProcessingOption::presets(["thumb", "square"]).into(),
            Trim::new(0).color("fff").into(),
            ProcessingOption::Rotate(180).into(),
            ProcessingOption::AutoRotate(false).into(),
            ProcessingOption::Filename("cat.jpg".to_string()).into(),
        ],
    )
    .unwrap();

    assert_eq!(
        url.path().unwrap(),
        "/ar:false/bg:1:2:3/bga:0.250/bl:3/c:0:120/dpr:2/el:true/ex:true:ce/fn:cat.jpg/g:no:0:12/\
         h:0/mb:4096/pd:1:2:3:4/pr:thumb:square/q:90/ra:lanczos2/rot:180/rt:auto/sh:1.5/\
         t:0:fff::/w:300/bG9jYWw6Ly8vaW1nLmpwZw"
    );
}

#[test]
fn test_background_forms_share_a_slot() {
    let url = ImageUrl::new(
        "a",
        [
            ProcessingOption::background_rgb(255, 255, 255),
            ProcessingOption::background_hex("000000"),
        ],
    )
    .unwrap();
    assert_eq!(url.option("bg"), Some("000000"));
}

fn signature_of(url: &str) -> &str {
    url.trim_start_matches('/').split('/').next().unwrap()
}
