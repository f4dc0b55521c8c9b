use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse::Parser, Attribute, Field, Fields, GenericParam, Ident, ItemStruct, Visibility};

/// Generate a color model struct with exactly three components.
///
/// The generated model gets public fields, the common derives, a `new`
/// constructor and conversions to and from `crate::color::Components`. Any
/// generic type parameters are treated as tags and stored as `PhantomData`.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let item = syn::parse_macro_input!(input as ItemStruct);
    expand(item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(mut item: ItemStruct) -> syn::Result<TokenStream2> {
    let components = component_names(&item)?;
    let tags = tag_fields(&item)?;

    for field in item.fields.iter_mut() {
        field.vis = Visibility::Public(Default::default());
    }

    item.attrs.extend(Attribute::parse_outer.parse2(quote! {
        #[derive(Clone, Copy, Debug, PartialEq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    })?);

    if let Fields::Named(named) = &mut item.fields {
        for (field, tag) in &tags {
            named.named.push(Field::parse_named.parse2(quote! {
                #[cfg_attr(feature = "serde", serde(skip))]
                #field: std::marker::PhantomData<#tag>
            })?);
        }
    }

    let impls = model_impls(&item, &components, &tags);

    Ok(quote! {
        #item
        #impls
    })
}

/// The names of the three component fields, in declaration order.
fn component_names(item: &ItemStruct) -> syn::Result<[Ident; 3]> {
    let names = match &item.fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|f| f.ident.clone())
            .collect::<Vec<_>>(),
        _ => vec![],
    };

    <[Ident; 3]>::try_from(names).map_err(|_| {
        syn::Error::new_spanned(
            &item.ident,
            "models must have exactly 3 named fields, one for each component of the color",
        )
    })
}

/// A `PhantomData` field name for every tag type parameter, paired with the
/// parameter itself.
fn tag_fields(item: &ItemStruct) -> syn::Result<Vec<(Ident, Ident)>> {
    item.generics
        .params
        .iter()
        .map(|param| match param {
            GenericParam::Type(ty) => {
                let field = format_ident!("_{}", ty.ident.to_string().to_lowercase());
                Ok((field, ty.ident.clone()))
            }
            other => Err(syn::Error::new_spanned(
                other,
                "models only accept type parameters, which are stored as tags",
            )),
        })
        .collect()
}

fn model_impls(
    item: &ItemStruct,
    [first, second, third]: &[Ident; 3],
    tags: &[(Ident, Ident)],
) -> TokenStream2 {
    let name = &item.ident;
    let (impl_gen, type_gen, where_clause) = item.generics.split_for_impl();
    let tag_fields = tags.iter().map(|(field, _)| field);

    quote! {
        impl #impl_gen #name #type_gen #where_clause {
            /// Create a new color in this model.
            pub fn new(
                #first: crate::color::Component,
                #second: crate::color::Component,
                #third: crate::color::Component,
            ) -> Self {
                Self {
                    #first,
                    #second,
                    #third,
                    #(#tag_fields: std::marker::PhantomData,)*
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#first, self.#second, self.#third)
            }
        }

        impl #impl_gen From<crate::color::Components> for #name #type_gen #where_clause {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl #impl_gen From<#name #type_gen> for crate::color::Components #where_clause {
            fn from(value: #name #type_gen) -> Self {
                value.to_components()
            }
        }
    }
}
