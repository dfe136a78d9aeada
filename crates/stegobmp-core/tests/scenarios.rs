use stegobmp_core::media::bmp::{serialize, standard_header, STANDARD_HEADER_LEN};
use stegobmp_core::media::color::{interpolate, BLUE, RED};
use stegobmp_core::media::pattern::color_at;
use stegobmp_core::{BmpImage, GradientKey, ImageProcessor, LsbCodec, PatternId, StegoError};

fn blank_bmp(width: i32, height: i32) -> Vec<u8> {
    let pixels = vec![0; (width * height * 3) as usize];
    serialize(&standard_header(width, height), width, height, &pixels).unwrap()
}

/// a carrier with exactly `bits` carrier bytes after the pixel offset
fn carrier_with_bits(bits: usize) -> Vec<u8> {
    let mut bmp = standard_header(0, 0);
    bmp.resize(STANDARD_HEADER_LEN + bits, 0x80);
    bmp
}

#[test]
fn checkerboard_on_a_2x2_image_should_match_the_expected_bytes() {
    let source = BmpImage::parse(&blank_bmp(2, 2)).unwrap();
    let rendered = ImageProcessor::new(PatternId::Checkerboard, GradientKey::lookup("1"))
        .render(&source)
        .unwrap();
    let bytes = rendered.to_bytes().unwrap();

    assert_eq!(bytes.len(), 54 + 12);
    assert_eq!(&bytes[..54], &blank_bmp(2, 2)[..54]);
    // every pixel lies in the first 20x20 square, red stored as B, G, R
    for pixel in bytes[54..].chunks(3) {
        assert_eq!(pixel, &[0x00, 0x00, 0xff]);
    }
}

#[test]
fn checkerboard_should_switch_to_the_end_color_in_the_next_square() {
    let gradient = GradientKey::RedToBlue.gradient();

    assert_eq!(color_at(0, 0, 2, 2, PatternId::Checkerboard, &gradient), RED);
    assert_eq!(color_at(1, 1, 2, 2, PatternId::Checkerboard, &gradient), RED);
    assert_eq!(color_at(20, 0, 40, 40, PatternId::Checkerboard, &gradient), BLUE);
    assert_eq!(color_at(0, 20, 40, 40, PatternId::Checkerboard, &gradient), BLUE);

    let source = BmpImage::parse(&blank_bmp(40, 40)).unwrap();
    let rendered = ImageProcessor::new(PatternId::Checkerboard, GradientKey::RedToBlue)
        .render(&source)
        .unwrap();
    let at = |x: usize, y: usize| {
        let i = (y * 40 + x) * 3;
        rendered.pixels()[i..i + 3].to_vec()
    };
    assert_eq!(at(0, 0), vec![0x00, 0x00, 0xff]);
    assert_eq!(at(20, 0), vec![0xff, 0x00, 0x00]);
    assert_eq!(at(0, 20), vec![0xff, 0x00, 0x00]);
    assert_eq!(at(20, 20), vec![0x00, 0x00, 0xff]);
}

#[test]
fn interpolation_should_round_half_up_between_red_and_blue() {
    assert_eq!(interpolate(RED, BLUE, 0.0), RED);
    assert_eq!(interpolate(RED, BLUE, 1.0), BLUE);
    assert_eq!(interpolate(RED, BLUE, 0.5), [128, 0, 128]);
}

#[test]
fn hi_should_fit_into_56_carrier_bits() {
    let secret = LsbCodec::embed("hi!".as_bytes(), &carrier_with_bits(56)).unwrap();

    assert_eq!(LsbCodec::extract(&secret).unwrap(), "hi!");
}

#[test]
fn hi_should_not_fit_into_50_carrier_bits() {
    assert!(matches!(
        LsbCodec::embed("hi!".as_bytes(), &carrier_with_bits(50)),
        Err(StegoError::InsufficientCapacity {
            required: 56,
            available: 50
        })
    ));
}

#[test]
fn capacity_should_end_exactly_at_the_carrier_size() {
    for payload_len in [1usize, 2, 17] {
        let payload = vec![b'x'; payload_len];
        let exact = 32 + payload_len * 8;

        assert!(LsbCodec::embed(&payload, &carrier_with_bits(exact)).is_ok());
        assert!(matches!(
            LsbCodec::embed(&payload, &carrier_with_bits(exact - 1)),
            Err(StegoError::InsufficientCapacity { .. })
        ));
    }
}

#[test]
fn messages_should_survive_a_round_trip() {
    let carrier = std::fs::read("tests/images/plain/carrier-image.bmp").unwrap();
    let capacity = LsbCodec::capacity(&carrier).unwrap();
    let long = "long message ".repeat(40);
    let full = "x".repeat(capacity);

    for message in [
        "a",
        "Hello World!",
        "Привіт, світ! 🦀",
        long.as_str(),
        full.as_str(),
    ] {
        let secret = LsbCodec::embed(message.as_bytes(), &carrier).unwrap();
        assert_eq!(secret.len(), carrier.len());
        assert_eq!(LsbCodec::extract(&secret).unwrap(), message);
    }

    assert!(LsbCodec::embed("x".repeat(capacity + 1).as_bytes(), &carrier).is_err());
}

#[test]
fn a_synthesized_image_should_carry_a_message() {
    let source =
        BmpImage::parse(&std::fs::read("tests/images/plain/carrier-image.bmp").unwrap()).unwrap();
    let rendered = ImageProcessor::new(PatternId::DiagonalStripes, GradientKey::GreenToMagenta)
        .render(&source)
        .unwrap();

    let secret = LsbCodec::embed("stripes".as_bytes(), &rendered.to_bytes().unwrap()).unwrap();
    let reparsed = BmpImage::parse(&secret).unwrap();

    assert_eq!(reparsed.dimensions(), source.dimensions());
    assert_eq!(LsbCodec::extract(&secret).unwrap(), "stripes");
}

#[test]
fn parse_and_serialize_should_be_idempotent() {
    let bytes = std::fs::read("tests/images/with_text/hello_world.bmp").unwrap();
    let image = BmpImage::parse(&bytes).unwrap();
    let first = serialize(image.header(), image.width(), image.height(), image.pixels()).unwrap();
    let again = BmpImage::parse(&first).unwrap();
    let second = serialize(again.header(), again.width(), again.height(), again.pixels()).unwrap();

    assert_eq!(first, bytes);
    assert_eq!(second, first);
}

#[test]
fn serialize_should_refuse_a_pixel_buffer_of_the_wrong_size() {
    assert!(matches!(
        serialize(&standard_header(2, 2), 2, 2, &[0; 11]),
        Err(StegoError::PixelBufferMismatch {
            expected: 12,
            actual: 11
        })
    ));
}

#[test]
fn the_fixture_should_unveil_hello_world() {
    let secret = std::fs::read("tests/images/with_text/hello_world.bmp").unwrap();

    assert_eq!(LsbCodec::extract(&secret).unwrap(), "Hello World!");
}
