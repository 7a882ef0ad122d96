//! Implementation of the `#[derive(Reflect)]` macro.

use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Expr, Field, Fields, Ident, LitStr, Path};

#[derive(Clone, Copy, PartialEq)]
enum MethodKind {
    Getter,
    Setter,
    TryGetter,
    TrySetter,
}

impl MethodKind {
    fn from_path(path: &Path) -> Option<Self> {
        if path.is_ident("getters") {
            Some(MethodKind::Getter)
        } else if path.is_ident("setters") {
            Some(MethodKind::Setter)
        } else if path.is_ident("try_getters") {
            Some(MethodKind::TryGetter)
        } else if path.is_ident("try_setters") {
            Some(MethodKind::TrySetter)
        } else {
            None
        }
    }

    fn arity(self) -> u8 {
        match self {
            MethodKind::Getter | MethodKind::TryGetter => 0,
            MethodKind::Setter | MethodKind::TrySetter => 1,
        }
    }
}

struct DeclaredMethod {
    ident: Ident,
    kind: MethodKind,
}

struct TypeOptions {
    krate: Path,
    name: Option<Expr>,
    blank: Option<Expr>,
    methods: Vec<DeclaredMethod>,
}

impl TypeOptions {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = TypeOptions {
            krate: syn::parse_quote!(::dtomap_reflect),
            name: None,
            blank: None,
            methods: Vec::new(),
        };

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("reflect")) {
            attr.parse_nested_meta(|meta| options.apply(meta))?;
        }
        Ok(options)
    }

    fn apply(&mut self, meta: ParseNestedMeta<'_>) -> syn::Result<()> {
        if meta.path.is_ident("crate") {
            let path: LitStr = meta.value()?.parse()?;
            self.krate = path.parse()?;
        } else if meta.path.is_ident("name") {
            self.name = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("blank") {
            self.blank = Some(meta.value()?.parse()?);
        } else if let Some(kind) = MethodKind::from_path(&meta.path) {
            meta.parse_nested_meta(|method| {
                let ident = method.path.require_ident()?.clone();
                self.methods.push(DeclaredMethod { ident, kind });
                Ok(())
            })?;
        } else {
            return Err(meta.error(
                "unknown reflect attribute, expected one of: name, blank, crate, \
                 getters, setters, try_getters, try_setters",
            ));
        }
        Ok(())
    }
}

struct DeclaredField {
    ident: Ident,
    visibility: Ident,
    with: Option<Path>,
}

impl DeclaredField {
    /// `None` for a skipped field.
    fn parse(field: &Field) -> syn::Result<Option<Self>> {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };

        let mut skip = false;
        let mut with: Option<Path> = None;
        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("reflect")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else if meta.path.is_ident("with") {
                    with = Some(meta.value()?.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unknown reflect field attribute, expected `skip` or `with`"))
                }
            })?;
        }
        if skip {
            return Ok(None);
        }

        let visibility = match field.vis {
            syn::Visibility::Public(_) => format_ident!("Public"),
            syn::Visibility::Restricted(_) => format_ident!("Protected"),
            _ => format_ident!("Private"),
        };
        Ok(Some(DeclaredField {
            ident,
            visibility,
            with,
        }))
    }

    fn member_name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .filter_map(|field| DeclaredField::parse(field).transpose())
                .collect::<syn::Result<Vec<_>>>()?,
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "Reflect can only be derived for structs with named fields, not tuple structs.",
                ))
            }
        },
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Reflect can only be derived for structs, not enums.",
            ))
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Reflect cannot be derived for unions.",
            ))
        }
    };
    let options = TypeOptions::parse(&input.attrs)?;

    let reflect_impl = generate_reflect(input, &options, &fields);
    let introspect_impl = generate_introspect(input, &options, &fields);
    Ok(quote! {
        #reflect_impl
        #introspect_impl
    })
}

fn generate_reflect(input: &DeriveInput, options: &TypeOptions, fields: &[DeclaredField]) -> TokenStream2 {
    let krate = &options.krate;
    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let reads = fields.iter().map(|field| {
        let ident = &field.ident;
        let member = field.member_name();
        match &field.with {
            Some(with) => quote! { #member => #with::to_value(&self.#ident), },
            None => quote! {
                #member => ::std::result::Result::Ok(
                    #krate::Value::from(::std::clone::Clone::clone(&self.#ident))
                ),
            },
        }
    });

    let writes = fields.iter().map(|field| {
        let ident = &field.ident;
        let member = field.member_name();
        match &field.with {
            Some(with) => quote! { #member => self.#ident = #with::from_value(value)?, },
            None => quote! { #member => self.#ident = #krate::FromValue::from_value(value)?, },
        }
    });
    let set_field_fn = if fields.is_empty() {
        quote! {
            fn set_field(
                &mut self,
                name: &str,
                _value: #krate::Value,
            ) -> ::std::result::Result<(), #krate::ReflectError> {
                ::std::result::Result::Err(#krate::ReflectError::no_such_field::<Self>(name))
            }
        }
    } else {
        quote! {
            fn set_field(
                &mut self,
                name: &str,
                value: #krate::Value,
            ) -> ::std::result::Result<(), #krate::ReflectError> {
                match name {
                    #(#writes)*
                    _ => return ::std::result::Result::Err(#krate::ReflectError::no_such_field::<Self>(name)),
                }
                ::std::result::Result::Ok(())
            }
        }
    };

    let calls: Vec<TokenStream2> = options
        .methods
        .iter()
        .filter_map(|method| {
            let ident = &method.ident;
            let member = ident.unraw().to_string();
            match method.kind {
                MethodKind::Getter => Some(quote! {
                    #member => ::std::result::Result::Ok(#krate::Value::from(self.#ident())),
                }),
                MethodKind::TryGetter => Some(quote! {
                    #member => self.#ident()
                        .map(#krate::Value::from)
                        .map_err(|e| #krate::ReflectError::failed(::std::string::ToString::to_string(&e))),
                }),
                MethodKind::Setter | MethodKind::TrySetter => None,
            }
        })
        .collect();

    let calls_with: Vec<TokenStream2> = options
        .methods
        .iter()
        .filter_map(|method| {
            let ident = &method.ident;
            let member = ident.unraw().to_string();
            match method.kind {
                MethodKind::Setter => Some(quote! {
                    #member => self.#ident(#krate::FromValue::from_value(arg)?),
                }),
                MethodKind::TrySetter => Some(quote! {
                    #member => self.#ident(#krate::FromValue::from_value(arg)?)
                        .map_err(|e| #krate::ReflectError::failed(::std::string::ToString::to_string(&e)))?,
                }),
                MethodKind::Getter | MethodKind::TryGetter => None,
            }
        })
        .collect();

    let call_fn = (!calls.is_empty()).then(|| {
        quote! {
            fn call(&self, name: &str) -> ::std::result::Result<#krate::Value, #krate::ReflectError> {
                match name {
                    #(#calls)*
                    _ => ::std::result::Result::Err(#krate::ReflectError::no_such_method::<Self>(name)),
                }
            }
        }
    });

    let call_with_fn = (!calls_with.is_empty()).then(|| {
        quote! {
            fn call_with(
                &mut self,
                name: &str,
                arg: #krate::Value,
            ) -> ::std::result::Result<(), #krate::ReflectError> {
                match name {
                    #(#calls_with)*
                    _ => return ::std::result::Result::Err(#krate::ReflectError::no_such_method::<Self>(name)),
                }
                ::std::result::Result::Ok(())
            }
        }
    });

    quote! {
        impl #impl_generics #krate::Reflect for #name #type_generics #where_clause {
            fn field(&self, name: &str) -> ::std::result::Result<#krate::Value, #krate::ReflectError> {
                match name {
                    #(#reads)*
                    _ => ::std::result::Result::Err(#krate::ReflectError::no_such_field::<Self>(name)),
                }
            }

            #set_field_fn
            #call_fn
            #call_with_fn
        }
    }
}

fn generate_introspect(input: &DeriveInput, options: &TypeOptions, fields: &[DeclaredField]) -> TokenStream2 {
    let krate = &options.krate;
    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    let identifier = match &options.name {
        Some(expr) => quote!(#expr),
        None => quote!(::std::concat!(::std::module_path!(), "::", ::std::stringify!(#name))),
    };
    let blank = match &options.blank {
        Some(expr) => quote!(#expr),
        None => quote!(<Self as ::std::default::Default>::default),
    };

    let declared_fields = fields.iter().map(|field| {
        let member = field.member_name();
        let visibility = &field.visibility;
        quote! { .field(#member, #krate::Visibility::#visibility) }
    });
    let declared_methods = options.methods.iter().map(|method| {
        let member = method.ident.unraw().to_string();
        let arity = method.kind.arity();
        quote! { .method(#member, #arity, #krate::Visibility::Public) }
    });

    quote! {
        impl #impl_generics #krate::Introspect for #name #type_generics #where_clause {
            fn describe() -> ::std::result::Result<#krate::TypeDescriptor, #krate::ReflectError> {
                #krate::TypeDescriptor::of(#identifier, #blank)
                    #(#declared_fields)*
                    #(#declared_methods)*
                    .build()
            }
        }
    }
}
