use crate::infra::parse_type_filter;
use clap::Args;
use listing_map::config::ListingsConfig;
use listing_map::error::AppError;
use listing_map::listings::{
    ChangeKind, Coordinate, FilterCriteria, Listing, ListingDraft, ListingService,
    ListingServiceError, PropertyType, TypeFilter,
};

#[derive(Args, Debug)]
pub(crate) struct BrowseArgs {
    /// Listing type to show: all, commercial, or private
    #[arg(long = "type", value_parser = parse_type_filter, default_value = "all")]
    pub(crate) property_type: TypeFilter,
    /// Case-insensitive text matched against title and address
    #[arg(long)]
    pub(crate) query: Option<String>,
    /// Only show listings in this barangay
    #[arg(long)]
    pub(crate) barangay: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Barangay for the demo listing
    #[arg(long, default_value = "Lagao")]
    pub(crate) barangay: String,
    /// Keep the demo listing instead of deleting it at the end
    #[arg(long)]
    pub(crate) keep_listing: bool,
}

impl BrowseArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            property_type: self.property_type,
            search_text: self.query.clone().unwrap_or_default(),
            neighborhood: self.barangay.clone(),
        }
    }
}

pub(crate) fn run_browse(args: BrowseArgs) -> Result<(), AppError> {
    let service = ListingService::from_config(ListingsConfig::default());
    let listings = service.browse(&args.criteria())?;

    let heading = match &args.barangay {
        Some(name) => format!("{name} Listings"),
        None => "Available Listings".to_string(),
    };
    println!("{heading}");
    render_listings(&listings);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = ListingService::from_config(ListingsConfig::default());

    service
        .store()
        .write(|store| {
            store.subscribe(Box::new(|change| {
                println!("  [rev {}] {}", change.revision, describe(&change.kind));
            }))
        })
        .map_err(ListingServiceError::from)?;

    println!("Listing map demo");
    println!("\nCatalog");
    render_listings(&service.browse(&FilterCriteria::all())?);

    println!("\nPublishing a listing");
    let listing = service.publish(demo_draft(&args.barangay))?;
    render_listings(std::slice::from_ref(&listing));

    println!("\nBookmarking");
    service.toggle_bookmark(&listing.id)?;
    if let Some(first) = service
        .browse(&FilterCriteria::all().with_type(TypeFilter::Commercial))?
        .first()
    {
        service.toggle_bookmark(&first.id)?;
    }
    println!("\nSaved listings");
    render_listings(&service.saved_listings()?);

    println!("\nMy listings");
    render_listings(&service.my_listings()?);

    if !args.keep_listing {
        println!("\nDeleting {}", listing.id);
        service.delete_my_listing(&listing.id)?;
        println!("\nSaved listings after delete");
        render_listings(&service.saved_listings()?);
    }

    Ok(())
}

fn demo_draft(barangay: &str) -> ListingDraft {
    ListingDraft {
        title: format!("{barangay} Residential Lot"),
        price: "₱3.2M".to_string(),
        property_type: PropertyType::Private,
        barangay: barangay.to_string(),
        details: "Titled lot along a cemented barangay road.".to_string(),
        location: Some(Coordinate::new(6.1290, 125.1720)),
        polygon: vec![
            Coordinate::new(6.1295, 125.1715),
            Coordinate::new(6.1295, 125.1725),
            Coordinate::new(6.1285, 125.1725),
            Coordinate::new(6.1285, 125.1715),
        ],
        images: Vec::new(),
        documents: Vec::new(),
    }
}

fn describe(kind: &ChangeKind) -> String {
    match kind {
        ChangeKind::Added { id } => format!("added {id}"),
        ChangeKind::Deleted {
            id,
            bookmark_cleared,
        } => {
            if *bookmark_cleared {
                format!("deleted {id} and its bookmark")
            } else {
                format!("deleted {id}")
            }
        }
        ChangeKind::BookmarkToggled { id, bookmarked } => {
            if *bookmarked {
                format!("bookmarked {id}")
            } else {
                format!("removed bookmark {id}")
            }
        }
    }
}

fn render_listings(listings: &[Listing]) {
    if listings.is_empty() {
        println!("- none");
        return;
    }
    for listing in listings {
        println!("- {}", listing_line(listing));
    }
}

fn listing_line(listing: &Listing) -> String {
    let origin = if listing.is_user_created {
        " (yours)"
    } else {
        ""
    };
    format!(
        "[{}] {} | {} ({} {}) | {} | {}{}",
        listing.id,
        listing.title,
        listing.property_type,
        listing.property_type.pin_icon(),
        listing.property_type.pin_color(),
        listing.price,
        listing.address,
        origin
    )
}
