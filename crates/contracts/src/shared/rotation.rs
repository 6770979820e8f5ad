//! Image cursors for card hover rotation and the events carousel.
//!
//! Hover rotation cycles through images `1..len`; image 0 is the cover and
//! only comes back when the pointer leaves the card. The carousel cycles
//! through every image.

/// Есть ли что вращать
pub fn rotates(len: usize) -> bool {
    len > 1
}

/// Изображение, показываемое сразу при наведении
pub fn first_hover_index(len: usize) -> usize {
    if rotates(len) {
        1
    } else {
        0
    }
}

/// Следующий кадр при наведении; обложка (0) пропускается
pub fn next_rotation_index(current: usize, len: usize) -> usize {
    if !rotates(len) {
        return 0;
    }
    let next = current + 1;
    if next >= len {
        1
    } else {
        next
    }
}

pub fn next_carousel_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}
