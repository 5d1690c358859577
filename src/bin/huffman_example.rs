use huffman_text_coder::huffman::{CodingError, HuffmanCoder, HuffmanTree};

fn main() -> Result<(), CodingError> {
    let text = "abracadabra";

    let tree = HuffmanTree::from_text(text)?;
    println!("Huffman tree:\n{}", tree);

    let coder = HuffmanCoder::new(&tree);
    println!("Huffman tree codes:\n{}", coder);

    let encoded = coder.encode_sequence(text)?;
    println!("text to encode\n{:?}", text);
    println!("encoded text\n{:?}", encoded);

    let decoded = coder.decode_sequence(&encoded)?;
    println!("decoded text\n{:?}", decoded);
    Ok(())
}
