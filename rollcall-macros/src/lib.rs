//! Registration attributes for Rollcall.
//!
//! `#[endpoint]`, `#[validator]`, and `#[subscriber]` go on the capability
//! trait impl. Each re-emits the impl unchanged and submits the matching
//! registration to the process-wide `inventory` collection, capturing the
//! request type from the trait's type argument and the registering module's
//! path as the component.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    DeriveInput, GenericArgument, ItemImpl, PathArguments, Type, parse_macro_input,
    spanned::Spanned,
};

/// Derive macro for implementing the `Request` marker trait.
#[proc_macro_derive(Request)]
pub fn derive_request(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::rollcall::Request for #name #ty_generics #where_clause {}
    };

    TokenStream::from(expanded)
}

/// The capability trait an attribute expects to find on the impl, and the
/// request type argument it carries.
struct CapabilityImpl {
    self_ty: Type,
    request: Option<Type>,
}

fn parse_capability_impl(item: &ItemImpl, trait_name: &str) -> syn::Result<CapabilityImpl> {
    let Some((_, trait_path, _)) = &item.trait_ else {
        return Err(syn::Error::new(
            item.span(),
            format!("this attribute goes on an `impl {trait_name}<..> for ..` block"),
        ));
    };

    let Some(segment) = trait_path.segments.last() else {
        return Err(syn::Error::new(trait_path.span(), "empty trait path"));
    };

    if segment.ident != trait_name {
        return Err(syn::Error::new(
            trait_path.span(),
            format!("expected an impl of `{trait_name}`, found `{}`", segment.ident),
        ));
    }

    let request = match &segment.arguments {
        PathArguments::None => None,
        PathArguments::AngleBracketed(args) => {
            let mut types = args.args.iter().filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty.clone()),
                _ => None,
            });
            let first = types.next();
            if types.next().is_some() {
                return Err(syn::Error::new(
                    args.span(),
                    format!("`{trait_name}` takes a single request type argument"),
                ));
            }
            first
        }
        PathArguments::Parenthesized(args) => {
            return Err(syn::Error::new(args.span(), "unexpected trait arguments"));
        }
    };

    Ok(CapabilityImpl {
        self_ty: (*item.self_ty).clone(),
        request,
    })
}

/// Registers an endpoint. Goes on the `Endpoint` impl:
///
/// ```rust,ignore
/// #[endpoint]
/// impl Endpoint<CreateOrderRequest> for CreateOrder { ... }
///
/// #[endpoint]
/// impl Endpoint for Ping { ... }   // bound to EmptyRequest
/// ```
///
/// The endpoint type must implement `Default`; use
/// `EndpointRegistration::with_factory` directly for fallible
/// construction.
#[proc_macro_attribute]
pub fn endpoint(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::TokenStream::from(attr).span(),
            "#[endpoint] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let input = parse_macro_input!(item as ItemImpl);
    let parsed = match parse_capability_impl(&input, "Endpoint") {
        Ok(parsed) => parsed,
        Err(error) => return error.to_compile_error().into(),
    };

    let self_ty = &parsed.self_ty;
    let request = parsed
        .request
        .map(|ty| quote! { #ty })
        .unwrap_or_else(|| quote! { ::rollcall::EmptyRequest });

    let expanded = quote! {
        #input

        ::rollcall::inventory::submit! {
            ::rollcall::Registration::Endpoint(
                ::rollcall::EndpointRegistration::new::<#self_ty, #request>(::core::module_path!())
            )
        }
    };

    TokenStream::from(expanded)
}

/// Registers a validator. Goes on the `Validator` impl, which must name
/// the request type it covers:
///
/// ```rust,ignore
/// #[validator]
/// impl Validator<CreateOrderRequest> for CreateOrderValidator { ... }
/// ```
#[proc_macro_attribute]
pub fn validator(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::TokenStream::from(attr).span(),
            "#[validator] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let input = parse_macro_input!(item as ItemImpl);
    let parsed = match parse_capability_impl(&input, "Validator") {
        Ok(parsed) => parsed,
        Err(error) => return error.to_compile_error().into(),
    };

    let Some(request) = parsed.request else {
        return syn::Error::new(
            input.span(),
            "validators must declare the request type they cover, \
             e.g. `impl Validator<MyRequest> for MyValidator`",
        )
        .to_compile_error()
        .into();
    };

    let self_ty = &parsed.self_ty;

    let expanded = quote! {
        #input

        ::rollcall::inventory::submit! {
            ::rollcall::Registration::Validator(
                ::rollcall::ValidatorRegistration::new::<#self_ty, #request>(::core::module_path!())
            )
        }
    };

    TokenStream::from(expanded)
}

/// Registers an event subscriber. Goes on the `EventSubscriber` impl:
///
/// ```rust,ignore
/// #[subscriber]
/// impl EventSubscriber for OrderPlacedMailer { ... }
/// ```
#[proc_macro_attribute]
pub fn subscriber(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new(
            proc_macro2::TokenStream::from(attr).span(),
            "#[subscriber] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let input = parse_macro_input!(item as ItemImpl);
    let parsed = match parse_capability_impl(&input, "EventSubscriber") {
        Ok(parsed) => parsed,
        Err(error) => return error.to_compile_error().into(),
    };

    if let Some(request) = parsed.request {
        return syn::Error::new(
            request.span(),
            "`EventSubscriber` takes no request type argument",
        )
        .to_compile_error()
        .into();
    }

    let self_ty = &parsed.self_ty;

    let expanded = quote! {
        #input

        ::rollcall::inventory::submit! {
            ::rollcall::Registration::Subscriber(
                ::rollcall::SubscriberRegistration::new::<#self_ty>(::core::module_path!())
            )
        }
    };

    TokenStream::from(expanded)
}
