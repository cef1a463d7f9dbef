use huffman_codec::container::{EncodedReadExt, EncodedWriteExt, from_bytes, to_bytes};
use huffman_codec::{EncodedOutput, HuffmanCodec, HuffmanError, compress, decompress};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use tempfile::tempdir;

#[test]
fn test_file_roundtrip_bytes() {
    let original = b"Huffman encoding is a greedy algorithm that builds optimal prefix codes. \
                     The quick brown fox jumps over the lazy dog."
        .to_vec();

    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("sample.huff");

    let codec = HuffmanCodec::new();
    let encoded = codec.encode(&original).expect("encode failed");
    {
        let mut writer = BufWriter::new(File::create(&path).expect("Failed to create file"));
        writer.write_encoded(&encoded).expect("write failed");
        writer.flush().expect("flush failed");
    }

    let mut reader = BufReader::new(File::open(&path).expect("Failed to open file"));
    let restored: EncodedOutput<u8> = reader.read_encoded().expect("read failed");
    assert_eq!(restored, encoded);
    assert_eq!(codec.decode_output(&restored).expect("decode failed"), original);

    // Only the frequency table is stored next to the bits.
    let file_len = std::fs::metadata(&path).expect("metadata").len();
    let table_len = 4 + encoded.frequencies.len() as u64 * 9;
    assert_eq!(file_len, 6 + table_len + 8 + encoded.bits.len().div_ceil(8) as u64);
    assert!(codec.metrics(&encoded).ratio() > 0.0);
}

#[test]
fn test_file_roundtrip_text() {
    let text = "žluťoučký kůň úpěl ďábelské ódy";
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("text.huff");

    std::fs::write(&path, huffman_codec::compress_str(text).unwrap()).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(huffman_codec::decompress_str(&bytes).unwrap(), text);
}

#[test]
fn test_several_streams_in_one_file() {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("multi.huff");
    let inputs: Vec<Vec<u8>> = vec![b"first".to_vec(), Vec::new(), vec![b'q'; 9], b"fourth one".to_vec()];

    let codec = HuffmanCodec::new();
    {
        let mut writer = BufWriter::new(File::create(&path).unwrap());
        for input in &inputs {
            writer.write_encoded(&codec.encode(input).unwrap()).unwrap();
        }
        writer.flush().unwrap();
    }

    let mut reader = BufReader::new(File::open(&path).unwrap());
    for input in &inputs {
        let encoded: EncodedOutput<u8> = reader.read_encoded().unwrap();
        assert_eq!(&codec.decode_output(&encoded).unwrap(), input);
    }
}

#[test]
fn test_in_memory_roundtrip() {
    let data = b"abracadabra abracadabra".to_vec();
    let packed = compress(&data).unwrap();
    assert_eq!(decompress(&packed).unwrap(), data);

    let encoded = HuffmanCodec::new().encode(&data).unwrap();
    let bytes = to_bytes(&encoded).unwrap();
    assert_eq!(bytes, packed);
    assert_eq!(from_bytes::<u8>(&bytes).unwrap(), encoded);
}

#[test]
fn test_corrupted_count_is_detected() {
    // Bump the count of one symbol: the stream no longer matches the table.
    let mut packed = compress(b"aabbbcccc").unwrap();
    // magic(4) version(1) kind(1) entries(4) 'a'(1), then the u64 count.
    let count_last_byte = 4 + 1 + 1 + 4 + 1 + 7;
    assert_eq!(packed[count_last_byte], 2);
    packed[count_last_byte] = 3;
    let err = decompress(&packed).unwrap_err();
    assert!(err.is_data_error());
    assert!(matches!(
        err,
        HuffmanError::MalformedStream { .. } | HuffmanError::InvalidFormat(_)
    ));
}

#[test]
fn test_truncated_file_is_rejected() {
    let packed = compress(b"some reasonably long input to truncate").unwrap();
    for cut in [1, 5, 12, packed.len() / 2, packed.len() - 1] {
        let err = decompress(&packed[..cut]).unwrap_err();
        assert!(matches!(err, HuffmanError::InvalidFormat(_)), "cut at {}: {:?}", cut, err);
    }
}
