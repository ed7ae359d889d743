//! Procedural macros for the advent-solver framework

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Lit, parse_macro_input};

/// Derive macro implementing the `Solution` trait from `Part` impls.
///
/// Generates `Solution::run_part` dispatching part 1 through part N to the
/// matching `Part<N>` impl, and sets `Solution::PARTS` to N. The type must
/// implement `Part<N>` for every part in range or the generated match arms
/// fail to compile.
///
/// # Attributes
///
/// - `parts`: Required. How many parts the solution implements (at least 1)
///
/// # Example
///
/// ```ignore
/// use advent_solver::{InputParser, ParseError, Part, Solution, SolveError};
///
/// #[derive(Solution)]
/// #[solution(parts = 2)]
/// pub struct Solver;
///
/// impl InputParser for Solver {
///     // ... parse the raw text
/// }
///
/// impl Part<1> for Solver {
///     // ... solve part 1
/// }
///
/// impl Part<2> for Solver {
///     // ... solve part 2
/// }
/// ```
#[proc_macro_derive(Solution, attributes(solution))]
pub fn derive_solution(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_solution(&input) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_solution(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("solution"))
        .ok_or_else(|| {
            syn::Error::new(
                name.span(),
                "derive(Solution) requires a #[solution(parts = N)] attribute",
            )
        })?;

    let mut parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                parts = Some(lit_int.base10_parse()?);
                Ok(())
            } else {
                Err(meta.error("'parts' must be an integer literal"))
            }
        } else {
            Err(meta.error("unsupported attribute; expected 'parts'"))
        }
    })?;

    let parts = parts
        .ok_or_else(|| syn::Error::new_spanned(attr, "missing required 'parts' attribute"))?;
    if parts == 0 {
        return Err(syn::Error::new_spanned(attr, "'parts' must be at least 1"));
    }

    // One match arm per part, each requiring the matching Part<N> impl.
    let arms = (1..=parts).map(|n| {
        quote! {
            #n => <Self as ::advent_solver::Part<#n>>::solve(input),
        }
    });

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::advent_solver::Solution for #name #ty_generics #where_clause {
            const PARTS: u8 = #parts;

            fn run_part(
                input: &mut Self::Input<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::advent_solver::SolveError> {
                match part {
                    #(#arms)*
                    other => ::core::result::Result::Err(
                        ::advent_solver::SolveError::PartNotImplemented(other),
                    ),
                }
            }
        }
    })
}

/// Derive macro submitting a solution for automatic registry discovery.
///
/// Generates an `inventory` submission of a `SolutionPlugin`, so the
/// solution is picked up by `RegistryBuilder::register_all_plugins` without
/// being named anywhere.
///
/// # Attributes
///
/// - `year`: required, the puzzle year (e.g. 2021)
/// - `day`: required, 1 through 25
/// - `tags`: optional array of string literals for filtering (e.g. `["search", "grid"]`)
///
/// # Requirements
///
/// The type must implement the `Solution` trait. A missing impl is reported
/// at compile time:
///
/// ```text
/// error[E0277]: the trait bound `Solver: Solution` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use advent_solver::{RegisterSolution, Solution};
///
/// #[derive(Solution, RegisterSolution)]
/// #[solution(parts = 2)]
/// #[puzzle(year = 2021, day = 15, tags = ["search", "grid"])]
/// pub struct Solver;
/// ```
#[proc_macro_derive(RegisterSolution, attributes(puzzle))]
pub fn derive_register_solution(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand_register_solution(&input) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_register_solution(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .ok_or_else(|| {
            syn::Error::new(
                name.span(),
                "derive(RegisterSolution) requires a #[puzzle(...)] attribute",
            )
        })?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                year = Some(lit_int.base10_parse()?);
                Ok(())
            } else {
                Err(meta.error("'year' must be an integer literal"))
            }
        } else if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                day = Some(lit_int.base10_parse()?);
                Ok(())
            } else {
                Err(meta.error("'day' must be an integer literal"))
            }
        } else if meta.path.is_ident("tags") {
            // Array of string literals: tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                match content.parse::<Lit>()? {
                    Lit::Str(lit_str) => tags.push(lit_str.value()),
                    other => {
                        return Err(syn::Error::new_spanned(other, "tags must be string literals"));
                    }
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
            Ok(())
        } else {
            Err(meta.error("unsupported attribute; expected 'year', 'day' or 'tags'"))
        }
    })?;

    let year =
        year.ok_or_else(|| syn::Error::new_spanned(attr, "missing required 'year' attribute"))?;
    let day =
        day.ok_or_else(|| syn::Error::new_spanned(attr, "missing required 'day' attribute"))?;
    if day == 0 || day > 25 {
        return Err(syn::Error::new(Span::call_site(), "'day' must be 1-25"));
    }

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    Ok(quote! {
        // Surfaces a missing Solution impl as a readable error instead of a
        // failure inside the inventory submission.
        const _: () = {
            trait MustImplementSolution: ::advent_solver::Solution {}
            impl MustImplementSolution for #name {}
        };

        ::advent_solver::inventory::submit! {
            ::advent_solver::SolutionPlugin {
                year: #year,
                day: #day,
                solution: &#name,
                tags: #tags_array,
            }
        }
    })
}
