//! Port compatibility.
//!
//! Deciding whether two ports may be connected only needs two facts about the
//! type hierarchy: which type is the wildcard and whether one type is the same
//! as or an ancestor of another. [`TypeLattice`] captures exactly that, so the
//! matching rules below work against the live [`ModuleRegistry`]( crate::ModuleRegistry ),
//! a snapshot of it, or any hand-built hierarchy.
//!
//! Matching is directional. The *super* signature describes what is accepted
//! and the *sub* signature what is offered: an offered type is acceptable when
//! the accepted type is the same as or an ancestor of it.

use crate::module_key::ModuleKey ;
use crate::port::{ Endpoint, Port };
use crate::signature::Signature ;



/// The type relationships port matching relies on.
pub trait TypeLattice {
    /// Returns `true` if `key` is the type that matches every other type.
    fn is_wildcard( &self, key: &ModuleKey ) -> bool ;

    /// Returns `true` if `ancestor` is `descendant` or one of its ancestors.
    /// Unregistered keys are only related to themselves.
    fn is_same_or_ancestor( &self, ancestor: &ModuleKey, descendant: &ModuleKey ) -> bool ;
}

/// Returns `true` if a value described by `sub` may flow where `super_signature` is expected.
///
/// A signature made of a single wildcard entry on either side matches any
/// signature, whatever its arity. Otherwise both signatures must have the same
/// arity and every pair of entries must match: a wildcard on either side of a
/// pair passes, any other pair passes only if the super type is the same as or
/// an ancestor of the sub type.
///
/// ```
/// use module_registry::{ are_specs_matched, ModuleKey, Signature, TypeLattice };
///
/// // A flat lattice: `any` is the wildcard and nothing else is related.
/// struct Flat ;
/// impl TypeLattice for Flat {
///     fn is_wildcard( &self, key: &ModuleKey ) -> bool { key.name() == "any" }
///     fn is_same_or_ancestor( &self, a: &ModuleKey, b: &ModuleKey ) -> bool { a == b }
/// }
///
/// let any = Signature::single( ModuleKey::new( "t", "any" ));
/// let pair = Signature::from_types([ ModuleKey::new( "t", "a" ), ModuleKey::new( "t", "b" )]).unwrap();
/// assert!( are_specs_matched( &Flat, &any, &pair ));
/// assert!( are_specs_matched( &Flat, &pair, &any ));
/// assert!( !are_specs_matched( &Flat, &pair, &Signature::single( ModuleKey::new( "t", "a" ))));
/// ```
pub fn are_specs_matched<L: TypeLattice + ?Sized>( lattice: &L, super_signature: &Signature, sub: &Signature ) -> bool {
    let is_lone_wildcard = | signature: &Signature | signature.arity() == 1 && lattice.is_wildcard( signature.first().value_type() );
    if is_lone_wildcard( super_signature ) || is_lone_wildcard( sub ) { return true }
    if super_signature.arity() != sub.arity() { return false }
    super_signature.entries().zip( sub.entries() ).all(|( accepted, offered )| {
        let ( accepted, offered ) = ( accepted.value_type(), offered.value_type() );
        lattice.is_wildcard( accepted )
            || lattice.is_wildcard( offered )
            || lattice.is_same_or_ancestor( accepted, offered )
    })
}

/// Returns `true` if a connection may be drawn between `a` and `b`.
///
/// The ports must sit on opposite endpoints. Whichever of them is the output
/// port offers its signature to the input port, regardless of argument order.
pub fn can_connect<L: TypeLattice + ?Sized>( lattice: &L, a: &Port, b: &Port ) -> bool {
    if a.endpoint() == b.endpoint() { return false }
    let ( source, destination ) = match a.endpoint() {
        Endpoint::Source => ( a, b ),
        Endpoint::Destination => ( b, a ),
    };
    are_specs_matched( lattice, destination.signature(), source.signature() )
}

/// Returns `true` if `sub` is a valid refinement of the inherited port `super_port`:
/// same endpoint, same name and a signature `super_port` accepts.
pub fn is_port_sub_type<L: TypeLattice + ?Sized>( lattice: &L, super_port: &Port, sub: &Port ) -> bool {
    super_port.endpoint() == sub.endpoint()
        && super_port.name() == sub.name()
        && are_specs_matched( lattice, super_port.signature(), sub.signature() )
}
