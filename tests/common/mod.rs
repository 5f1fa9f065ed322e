/// Smallest face the parser accepts: `head`, `hhea`, `hmtx` and `maxp` with a
/// single `.notdef` glyph of the given advance. No `cmap`, so every character
/// falls back to glyph 0.
#[allow(dead_code)]
pub fn tiny_face(units_per_em: u16, advance: u16) -> Vec<u8> {
    tiny_face_with_glyphs(units_per_em, advance, &[])
}

/// Like [`tiny_face`], plus one glyph per `(char, advance)` pair, mapped by a
/// format 4 `cmap` subtable. `glyphs` must be sorted by character.
#[allow(dead_code)]
pub fn tiny_face_with_glyphs(units_per_em: u16, notdef_advance: u16, glyphs: &[(char, u16)]) -> Vec<u8> {
    let num_glyphs = 1 + glyphs.len() as u16;
    let max_advance = glyphs
        .iter()
        .map(|&(_, adv)| adv)
        .fold(notdef_advance, u16::max);

    let mut head = vec![0u8; 54];
    head[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    head[12..16].copy_from_slice(&0x5F0F_3CF5u32.to_be_bytes());
    head[18..20].copy_from_slice(&units_per_em.to_be_bytes());

    let mut hhea = vec![0u8; 36];
    hhea[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    hhea[10..12].copy_from_slice(&max_advance.to_be_bytes());
    hhea[34..36].copy_from_slice(&num_glyphs.to_be_bytes());

    let mut hmtx = Vec::new();
    for adv in core::iter::once(notdef_advance).chain(glyphs.iter().map(|&(_, adv)| adv)) {
        hmtx.extend_from_slice(&adv.to_be_bytes());
        hmtx.extend_from_slice(&0i16.to_be_bytes());
    }

    let mut maxp = Vec::new();
    maxp.extend_from_slice(&0x0000_5000u32.to_be_bytes());
    maxp.extend_from_slice(&num_glyphs.to_be_bytes());

    let mut tables: Vec<(&[u8; 4], Vec<u8>)> = Vec::new();
    if !glyphs.is_empty() {
        tables.push((b"cmap", cmap_format4(glyphs)));
    }
    // Records must be sorted by tag.
    tables.push((b"head", head));
    tables.push((b"hhea", hhea));
    tables.push((b"hmtx", hmtx));
    tables.push((b"maxp", maxp));

    let mut out = Vec::new();
    out.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    out.extend_from_slice(&(tables.len() as u16).to_be_bytes());
    out.extend_from_slice(&[0u8; 6]); // search range, entry selector, range shift

    let header_len = 12 + 16 * tables.len();
    let mut body = Vec::new();
    for (tag, data) in &tables {
        out.extend_from_slice(*tag);
        out.extend_from_slice(&0u32.to_be_bytes());
        out.extend_from_slice(&((header_len + body.len()) as u32).to_be_bytes());
        out.extend_from_slice(&(data.len() as u32).to_be_bytes());
        body.extend_from_slice(data);
        while body.len() % 4 != 0 {
            body.push(0);
        }
    }
    out.extend_from_slice(&body);
    out
}

/// `cmap` with one Windows Unicode BMP subtable: a one-code segment per glyph
/// (glyph ids from 1) and the closing 0xFFFF segment.
fn cmap_format4(glyphs: &[(char, u16)]) -> Vec<u8> {
    let seg_count = glyphs.len() as u16 + 1;
    let mut ends = Vec::new();
    let mut starts = Vec::new();
    let mut deltas = Vec::new();
    for (i, &(ch, _)) in glyphs.iter().enumerate() {
        let code = ch as u16;
        let glyph = i as u16 + 1;
        ends.push(code);
        starts.push(code);
        deltas.push(glyph.wrapping_sub(code));
    }
    ends.push(0xFFFF);
    starts.push(0xFFFF);
    deltas.push(1);

    let mut sub = Vec::new();
    sub.extend_from_slice(&4u16.to_be_bytes()); // format
    sub.extend_from_slice(&(16 + 8 * seg_count).to_be_bytes()); // length
    sub.extend_from_slice(&0u16.to_be_bytes()); // language
    sub.extend_from_slice(&(seg_count * 2).to_be_bytes());
    sub.extend_from_slice(&[0u8; 6]); // search range, entry selector, range shift
    for end in &ends {
        sub.extend_from_slice(&end.to_be_bytes());
    }
    sub.extend_from_slice(&0u16.to_be_bytes()); // reserved pad
    for start in &starts {
        sub.extend_from_slice(&start.to_be_bytes());
    }
    for delta in &deltas {
        sub.extend_from_slice(&delta.to_be_bytes());
    }
    for _ in 0..seg_count {
        sub.extend_from_slice(&0u16.to_be_bytes()); // id range offset
    }

    let mut cmap = Vec::new();
    cmap.extend_from_slice(&0u16.to_be_bytes()); // version
    cmap.extend_from_slice(&1u16.to_be_bytes()); // one encoding record
    cmap.extend_from_slice(&3u16.to_be_bytes()); // Windows
    cmap.extend_from_slice(&1u16.to_be_bytes()); // Unicode BMP
    cmap.extend_from_slice(&12u32.to_be_bytes());
    cmap.extend_from_slice(&sub);
    cmap
}
