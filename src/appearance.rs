//! Display metadata attached to module types.
//!
//! Colors and fringes only inform how the editor draws a module box. They take
//! no part in matching or hierarchy logic, but they are validated when a type
//! is registered so that the editor never receives out-of-range values.

use thiserror::Error ;



/// Error produced when module display options are out of range.
#[derive( Debug, Clone, PartialEq, Error )]
pub enum OptionsError {
    /// A color component is outside `[0, 1]` or not finite.
    #[error( "Color component {index} is {value}, expected a value in [0, 1]" )]
    InvalidColor { index: usize, value: f64 },
    /// A fringe has no points.
    #[error( "Fringe must contain at least one point" )]
    EmptyFringe,
    /// A fringe point lies on the wrong side of the box or has a `y` outside `[0, 1]`.
    #[error( "Fringe point ({x}, {y}) is out of range" )]
    InvalidFringePoint { x: f64, y: f64 },
}

/// RGB color of a module box, each component in `[0, 1]`.
#[derive( Debug, Clone, Copy, PartialEq )]
pub struct ModuleColor {
    rgb: [f64; 3],
}

impl ModuleColor {

    /// Creates a color, validating every component.
    ///
    /// # Errors
    /// Returns [`OptionsError::InvalidColor`] for a component outside `[0, 1]`.
    pub fn new( red: f64, green: f64, blue: f64 ) -> Result<Self, OptionsError> {
        let rgb = [ red, green, blue ];
        match rgb.iter().position(| value | !( 0.0..=1.0 ).contains( value )) {
            Some( index ) => Err( OptionsError::InvalidColor { index, value: rgb[ index ] }),
            None => Ok( Self { rgb }),
        }
    }

    /// The three components as `[red, green, blue]`.
    #[inline] pub fn rgb( &self ) -> [f64; 3] { self.rgb }

}

/// A point of a fringe: `x` is the horizontal offset, `y` the relative height.
pub type FringePoint = ( f64, f64 );

/// Fringe shape requested at registration.
#[derive( Debug, Clone, PartialEq )]
pub enum Fringe {
    /// One right-hand fringe, mirrored to build the left-hand one.
    Symmetric( Vec<FringePoint> ),
    /// Explicit left and right fringes.
    Asymmetric { left: Vec<FringePoint>, right: Vec<FringePoint> },
}

/// Resolved lateral fringes of a module box.
#[derive( Debug, Clone, PartialEq )]
pub struct ModuleFringe {
    left: Vec<FringePoint>,
    right: Vec<FringePoint>,
}

impl ModuleFringe {

    /// Left-hand fringe points.
    #[inline] pub fn left( &self ) -> &[FringePoint] { &self.left }
    /// Right-hand fringe points.
    #[inline] pub fn right( &self ) -> &[FringePoint] { &self.right }

}

impl TryFrom<Fringe> for ModuleFringe {
    type Error = OptionsError ;

    fn try_from( fringe: Fringe ) -> Result<Self, Self::Error> {
        match fringe {
            Fringe::Symmetric( right ) => {
                check_fringe( &right, 1.0 )?;
                // mirrored around the box centre, walked in reverse so the outline stays continuous
                let left = right.iter().rev().map(|&( x, y )| ( -x, 1.0 - y )).collect();
                Ok( Self { left, right })
            }
            Fringe::Asymmetric { left, right } => {
                check_fringe( &left, -1.0 )?;
                check_fringe( &right, 1.0 )?;
                Ok( Self { left, right })
            }
        }
    }
}

// `side` is 1.0 for right-hand fringes (x >= 0) and -1.0 for left-hand ones (x <= 0)
fn check_fringe( points: &[FringePoint], side: f64 ) -> Result<(), OptionsError> {
    if points.is_empty() { return Err( OptionsError::EmptyFringe ) }
    match points.iter().find(|( x, y )| !( x * side >= 0.0 && ( 0.0..=1.0 ).contains( y ))) {
        Some( &( x, y )) => Err( OptionsError::InvalidFringePoint { x, y }),
        None => Ok(()),
    }
}
