// Processing option tests
// Gravity validation in every context that embeds it, plus catalog rules

use imgproxy_url::*;
use rstest::rstest;

fn path_for(option: impl Into<UrlOption>) -> Result<String> {
    ImageUrl::default()
        .with_options([UrlOption::Source("a".to_string()), option.into()])?
        .path()
}

#[rstest]
#[case::north(GravityType::North, "no")]
#[case::south(GravityType::South, "so")]
#[case::east(GravityType::East, "ea")]
#[case::west(GravityType::West, "we")]
#[case::north_east(GravityType::NorthEast, "noea")]
#[case::north_west(GravityType::NorthWest, "nowe")]
#[case::south_east(GravityType::SouthEast, "soea")]
#[case::south_west(GravityType::SouthWest, "sowe")]
#[case::center(GravityType::Center, "ce")]
#[case::smart(GravityType::Smart, "sm")]
fn test_gravity_tokens(#[case] kind: GravityType, #[case] token: &str) {
    let path = path_for(Gravity::new(kind)).unwrap();
    assert_eq!(path, format!("/g:{}/YQ", token));
    assert_eq!(token.parse::<GravityType>().unwrap(), kind);
}

#[rstest]
#[case::smart_with_offsets(Gravity::with_offsets(GravityType::Smart, 1, 1))]
#[case::focus_point_without_offsets(Gravity::new(GravityType::FocusPoint))]
#[case::focus_point_integer_offsets(Gravity::with_offsets(GravityType::FocusPoint, 0, 1))]
#[case::focus_point_x_above_one(Gravity::focus_point(1.5, 0.5))]
#[case::focus_point_y_below_zero(Gravity::focus_point(0.5, -0.1))]
#[case::edge_with_float_offsets(Gravity {
    kind: GravityType::East,
    offsets: Some(GravityOffsets::Float { x: 0.5, y: 0.5 }),
})]
#[case::default_gravity(Gravity::default())]
fn test_invalid_gravity_rejected_everywhere_except_default(#[case] gravity: Gravity) {
    let standalone = path_for(gravity);
    assert!(
        matches!(standalone, Err(UrlError::Constraint { ref option, .. }) if option == "g"),
        "standalone gravity {:?} should be rejected",
        gravity
    );

    // Default gravity without offsets is legal when embedded
    if gravity == Gravity::default() {
        assert!(path_for(ProcessingOption::crop_with_gravity(1.0, 1.0, gravity)).is_ok());
        return;
    }

    let crop = path_for(ProcessingOption::crop_with_gravity(1.0, 1.0, gravity));
    assert!(matches!(crop, Err(UrlError::Constraint { ref option, .. }) if option == "c"));

    let extend = path_for(ProcessingOption::extend_with_gravity(true, gravity));
    assert!(matches!(extend, Err(UrlError::Constraint { ref option, .. }) if option == "ex"));
}

#[rstest]
#[case::crop(ProcessingOption::crop_with_gravity(0.5, 0.5, Gravity::focus_point(0.1, 0.9)), "/c:0.5:0.5:fp:0.100:0.900/YQ")]
#[case::extend(ProcessingOption::extend_with_gravity(true, Gravity::focus_point(0.0, 1.0)), "/ex:true:fp:0.000:1.000/YQ")]
#[case::gravity(ProcessingOption::Gravity(Gravity::focus_point(0.3333, 0.5)), "/g:fp:0.333:0.500/YQ")]
fn test_focus_point_embedding(#[case] option: ProcessingOption, #[case] expected: &str) {
    assert_eq!(path_for(option).unwrap(), expected);
}

#[test]
fn test_smart_allowed_in_crop_but_not_extend() {
    assert_eq!(
        path_for(ProcessingOption::crop_with_gravity(10.0, 10.0, Gravity::smart())).unwrap(),
        "/c:10:10:sm/YQ"
    );
    assert!(path_for(ProcessingOption::extend_with_gravity(true, Gravity::smart())).is_err());
}

#[test]
fn test_default_gravity_offsets_rejected_when_embedded() {
    let gravity = Gravity::with_offsets(GravityType::Default, 3, 4);
    assert!(path_for(ProcessingOption::crop_with_gravity(1.0, 1.0, gravity)).is_err());
    assert!(path_for(ProcessingOption::extend_with_gravity(true, gravity)).is_err());
}

#[rstest]
#[case::quality(ProcessingOption::Quality(101))]
#[case::dpr(ProcessingOption::Dpr(0))]
#[case::sharpen(ProcessingOption::Sharpen(-1.0))]
#[case::max_bytes(ProcessingOption::MaxBytes(0))]
#[case::alpha(ProcessingOption::BackgroundAlpha(-0.5))]
#[case::rotate(ProcessingOption::Rotate(100))]
#[case::padding(ProcessingOption::Padding(Padding::new(0, 0, 0, 0)))]
#[case::presets(ProcessingOption::Presets(Vec::new()))]
#[case::crop(ProcessingOption::crop(-0.5, 1.0))]
fn test_constraint_violations(#[case] option: ProcessingOption) {
    let key = option.key().to_string();
    let result = path_for(option);
    assert!(
        matches!(result, Err(UrlError::Constraint { ref option, .. }) if *option == key),
        "expected constraint violation for '{}'",
        key
    );
}

#[test]
fn test_raw_option_shares_slot_with_typed_option() {
    let url = ImageUrl::default()
        .with_options([
            UrlOption::Source("a".to_string()),
            ProcessingOption::Width(100).into(),
            ProcessingOption::raw("w", [250]).into(),
        ])
        .unwrap();
    assert_eq!(url.path().unwrap(), "/w:250/YQ");
}

#[test]
fn test_raw_option_with_gravity_argument() {
    let option = ProcessingOption::raw(
        "wm",
        [
            Argument::from(0.5),
            Argument::from(Gravity::with_offsets(GravityType::SouthEast, 10, 10)),
        ],
    );
    assert_eq!(path_for(option).unwrap(), "/wm:0.5:soea:10:10/YQ");
}
