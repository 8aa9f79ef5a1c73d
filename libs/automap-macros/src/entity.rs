use proc_macro_error2::{abort, emit_error};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Fields, LitStr, Type, spanned::Spanned};

const ATTR: &str = "automap";

/// Annotations parsed from `#[automap(...)]` on the struct.
#[derive(Default)]
struct EntityAttrs {
    table: Option<LitStr>,
    schema: Option<LitStr>,
    prefix: Option<LitStr>,
}

/// Annotations parsed from `#[automap(...)]` on a field.
#[derive(Default)]
struct FieldAttrs {
    ignore: Option<Span>,
    map_to: Option<LitStr>,
}

struct EntityField<'a> {
    name: String,
    ty: &'a Type,
    attrs: FieldAttrs,
}

pub fn expand_derive_entity(input: &DeriveInput) -> TokenStream {
    if let Some(param) = input.generics.params.first() {
        abort!(
            param,
            "#[derive(Entity)] does not support generic structs; implement `automap::Entity` manually"
        );
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            Fields::Unit => return expand(input, &parse_entity_attrs(&input.attrs), &[]),
            Fields::Unnamed(_) => {
                abort!(input.ident, "#[derive(Entity)] requires a struct with named fields")
            }
        },
        _ => abort!(input.ident, "#[derive(Entity)] can only be applied to structs"),
    };

    let entity_attrs = parse_entity_attrs(&input.attrs);

    let mut entity_fields = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            abort!(field, "#[derive(Entity)] requires named fields");
        };
        entity_fields.push(EntityField {
            name: ident.unraw().to_string(),
            ty: &field.ty,
            attrs: parse_field_attrs(&field.attrs),
        });
    }

    expand(input, &entity_attrs, &entity_fields)
}

fn expand(input: &DeriveInput, attrs: &EntityAttrs, fields: &[EntityField<'_>]) -> TokenStream {
    let struct_ident = &input.ident;
    let entity_name = struct_ident.unraw().to_string();

    let table = attrs.table.as_ref().map(|lit| quote! { .table(#lit) });
    let schema = attrs.schema.as_ref().map(|lit| quote! { .schema(#lit) });
    let prefix = attrs.prefix.as_ref().map(|lit| quote! { .column_prefix(#lit) });

    let properties = fields.iter().map(|field| {
        let name = &field.name;
        let ty = field.ty;
        let map_to = field.attrs.map_to.as_ref().map(|lit| quote! { .map_to(#lit) });
        let ignore = field.attrs.ignore.map(|_| quote! { .ignore() });
        quote! {
            .push(::automap::PropertyDescriptor::new::<#ty>(#name) #map_to #ignore)
        }
    });

    quote! {
        impl ::automap::Entity for #struct_ident {
            fn descriptor() -> &'static ::automap::TypeDescriptor {
                static DESCRIPTOR: ::std::sync::OnceLock<::automap::TypeDescriptor> =
                    ::std::sync::OnceLock::new();
                DESCRIPTOR.get_or_init(|| {
                    ::automap::TypeDescriptor::builder(#entity_name)
                        #table
                        #schema
                        #prefix
                        #(#properties)*
                        .build()
                })
            }
        }
    }
}

fn parse_entity_attrs(attrs: &[Attribute]) -> EntityAttrs {
    let mut parsed = EntityAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
        let result = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("table") {
                set_once(&mut parsed.table, &meta, "table")
            } else if meta.path.is_ident("schema") {
                set_once(&mut parsed.schema, &meta, "schema")
            } else if meta.path.is_ident("prefix") {
                set_once(&mut parsed.prefix, &meta, "prefix")
            } else if meta.path.is_ident("ignore") || meta.path.is_ident("map_to") {
                Err(meta.error("`ignore` and `map_to` are field attributes"))
            } else {
                Err(meta.error("unknown automap attribute; expected `table`, `schema` or `prefix`"))
            }
        });

        if let Err(e) = result {
            emit_error!(e.span(), "{}", e);
        }
    }

    parsed
}

fn parse_field_attrs(attrs: &[Attribute]) -> FieldAttrs {
    let mut parsed = FieldAttrs::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTR)) {
        let result = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("ignore") {
                if parsed.ignore.is_some() {
                    return Err(meta.error("duplicate `ignore`"));
                }
                parsed.ignore = Some(meta.path.span());
                Ok(())
            } else if meta.path.is_ident("map_to") {
                set_once(&mut parsed.map_to, &meta, "map_to")
            } else if meta.path.is_ident("table")
                || meta.path.is_ident("schema")
                || meta.path.is_ident("prefix")
            {
                Err(meta.error("`table`, `schema` and `prefix` are struct attributes"))
            } else {
                Err(meta.error("unknown automap attribute; expected `ignore` or `map_to`"))
            }
        });

        if let Err(e) = result {
            emit_error!(e.span(), "{}", e);
        }
    }

    parsed
}

fn set_once(slot: &mut Option<LitStr>, meta: &ParseNestedMeta<'_>, key: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate `{key}`")));
    }
    let lit: LitStr = meta
        .value()?
        .parse()
        .map_err(|e| syn::Error::new(e.span(), format!("`{key}` expects a string literal")))?;
    *slot = Some(lit);
    Ok(())
}
