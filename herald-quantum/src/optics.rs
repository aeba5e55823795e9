//! Ótica ideal: fonte spin–fóton e divisor de feixe com dois detectores
//!
//! ## Fonte
//!
//! ```text
//! |0⟩_s ─[Ry(α)]─●─   √(1-α)|0⟩_s|0⟩_p + √α|1⟩_s|1⟩_p
//! |0⟩_p ─────────⊕─
//! ```
//!
//! ## Divisor de feixe 50:50
//!
//! Sobre os modos (esquerdo, direito), com no máximo um fóton por modo:
//!
//! | Estado de entrada | Saída | Código |
//! |:------------------|:------|:------:|
//! | \|00⟩ | nada | 0 |
//! | (\|10⟩+\|01⟩)/√2 | 1 fóton em A | 1 |
//! | (\|10⟩−\|01⟩)/√2 | 1 fóton em B | 2 |
//! | \|11⟩ | 2 fótons em A ou em B (Hong–Ou–Mandel) | 4 / 5 |
//!
//! A coincidência (código 3) não ocorre com visibilidade ideal.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use crate::gates::Matrix4x4;

/// Código cru: nenhum clique
pub const CODE_VACUUM: u8 = 0;
/// Código cru: um clique em A
pub const CODE_SINGLE_A: u8 = 1;
/// Código cru: um clique em B
pub const CODE_SINGLE_B: u8 = 2;
/// Código cru: dois cliques em A
pub const CODE_DOUBLE_A: u8 = 4;
/// Código cru: dois cliques em B
pub const CODE_DOUBLE_B: u8 = 5;

/// Ramos de Kraus da medição conjunta, na base |esquerdo direito⟩
pub fn detection_branches(num_resolving: bool) -> Vec<(u8, Matrix4x4)> {
    let zero = Complex64::new(0.0, 0.0);
    let one = Complex64::new(1.0, 0.0);
    let h = Complex64::new(FRAC_1_SQRT_2, 0.0);

    let vacuum = Matrix4x4::projector([one, zero, zero, zero]);
    let psi_plus = Matrix4x4::projector([zero, h, h, zero]);
    let psi_minus = Matrix4x4::projector([zero, -h, h, zero]);
    let bunched = Matrix4x4::projector([zero, zero, zero, one]).scale(FRAC_1_SQRT_2);

    // sem resolução de número, dois fótons num canal clicam como um
    let (double_a, double_b) = if num_resolving {
        (CODE_DOUBLE_A, CODE_DOUBLE_B)
    } else {
        (CODE_SINGLE_A, CODE_SINGLE_B)
    };

    vec![
        (CODE_VACUUM, vacuum),
        (CODE_SINGLE_A, psi_plus),
        (CODE_SINGLE_B, psi_minus),
        (double_a, bunched),
        (double_b, bunched),
    ]
}
